//! Task Row Component
//!
//! Checkbox, label and delete button for one task. Deleting takes two
//! clicks: the first arms the button (red), the second deletes.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use crate::component::{Component, Slot};
use crate::config::WidgetConfig;
use crate::dom::{create_element, Listener, View};
use crate::error::UiError;
use crate::logging;
use crate::models::SharedTask;

pub type OnDeleteTask = Rc<dyn Fn()>;

/// Click counter behind the delete button. Odd counts are "armed", every
/// even count confirms. It lives and dies with the row.
#[derive(Debug, Default)]
pub struct DeleteCounter {
    clicks: Cell<u32>,
}

impl DeleteCounter {
    /// Register a click; true when this click confirms the delete
    pub fn press(&self) -> bool {
        let clicks = self.clicks.get() + 1;
        self.clicks.set(clicks);
        clicks % 2 == 0
    }

    pub fn is_armed(&self) -> bool {
        self.clicks.get() % 2 == 1
    }
}

pub struct Task {
    task: SharedTask,
    on_delete_task: OnDeleteTask,
    count_for_delete: DeleteCounter,
    config: Rc<WidgetConfig>,
    slot: Slot,
}

impl Task {
    pub fn new(task: SharedTask, on_delete_task: OnDeleteTask, config: Rc<WidgetConfig>) -> Rc<Self> {
        Rc::new(Self {
            task,
            on_delete_task,
            count_for_delete: DeleteCounter::default(),
            config,
            slot: Slot::new(),
        })
    }

    fn toggle(self: &Rc<Self>) {
        let done = {
            let mut task = self.task.borrow_mut();
            task.done = !task.done;
            task.done
        };
        logging::debug("Task", format!("toggled {:?} -> done={}", self.task.borrow().text, done));
        if let Err(e) = self.update() {
            logging::error("Task", format!("update after toggle failed: {}", e));
        }
    }

    fn press_delete(self: &Rc<Self>) {
        if self.count_for_delete.press() {
            (self.on_delete_task)();
        }
        // The row re-renders even after a delete, detached or not
        if let Err(e) = self.update() {
            logging::error("Task", format!("update after delete click failed: {}", e));
        }
    }
}

impl Component for Task {
    const NAME: &'static str = "Task";

    fn slot(&self) -> &Slot {
        &self.slot
    }

    fn render(self: &Rc<Self>) -> Result<View, UiError> {
        let (text, done) = {
            let task = self.task.borrow();
            (task.text.clone(), task.done)
        };

        let me: Weak<Self> = Rc::downgrade(self);
        let on_toggle = Listener::new("click", move |_ev| {
            if let Some(this) = me.upgrade() {
                this.toggle();
            }
        });

        let me: Weak<Self> = Rc::downgrade(self);
        let on_delete = Listener::new("click", move |_ev| {
            if let Some(this) = me.upgrade() {
                this.press_delete();
            }
        });

        let mut checkbox_attrs = vec![("type", "checkbox")];
        if done {
            checkbox_attrs.push(("checked", "true"));
        }
        let checkbox = create_element("input", &checkbox_attrs, (), vec![on_toggle])?;

        let label = create_element("label", &[], text, Vec::new())?;

        let delete_style = if self.count_for_delete.is_armed() {
            self.config.armed_delete_style.as_str()
        } else {
            ""
        };
        let delete = create_element(
            "button",
            &[("style", delete_style)],
            self.config.delete_label.as_str(),
            vec![on_delete],
        )?;

        let row_style = if done { self.config.done_style.as_str() } else { "" };
        create_element(
            "li",
            &[("style", row_style)],
            vec![checkbox.into(), label.into(), delete.into()],
            Vec::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_counter_confirms_on_even_clicks() {
        let counter = DeleteCounter::default();
        assert!(!counter.is_armed());

        assert!(!counter.press());
        assert!(counter.is_armed());

        assert!(counter.press());
        assert!(!counter.is_armed());

        // Cycle starts over
        assert!(!counter.press());
        assert!(counter.press());
    }
}
