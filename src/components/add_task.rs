//! Add Task Component
//!
//! Text input plus "+" button for creating tasks.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;

use crate::component::{Component, Slot};
use crate::config::WidgetConfig;
use crate::dom::{create_element, Listener, View};
use crate::error::UiError;

pub type OnAddTask = Rc<dyn Fn(String)>;

/// Input row for new tasks.
///
/// The typed text is only read when the button fires; it is passed on
/// untrimmed, validation belongs to whoever handles `on_add_task`.
pub struct AddTask {
    on_add_task: OnAddTask,
    text: RefCell<String>,
    config: Rc<WidgetConfig>,
    slot: Slot,
}

impl AddTask {
    pub fn new(on_add_task: OnAddTask, config: Rc<WidgetConfig>) -> Rc<Self> {
        Rc::new(Self {
            on_add_task,
            text: RefCell::new(String::new()),
            config,
            slot: Slot::new(),
        })
    }

    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn on_input(&self, value: String) {
        *self.text.borrow_mut() = value;
    }

    fn submit(&self) {
        let text = self.text();
        (self.on_add_task)(text);
    }
}

impl Component for AddTask {
    const NAME: &'static str = "AddTask";

    fn slot(&self) -> &Slot {
        &self.slot
    }

    fn render(self: &Rc<Self>) -> Result<View, UiError> {
        let me: Weak<Self> = Rc::downgrade(self);
        let on_input = Listener::new("input", move |ev| {
            let Some(this) = me.upgrade() else { return };
            let input = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok());
            if let Some(input) = input {
                this.on_input(input.value());
            }
        });

        let me: Weak<Self> = Rc::downgrade(self);
        let on_click = Listener::new("click", move |_ev| {
            if let Some(this) = me.upgrade() {
                this.submit();
            }
        });

        let input = create_element(
            "input",
            &[
                ("id", "new-todo"),
                ("type", "text"),
                ("placeholder", self.config.input_placeholder.as_str()),
            ],
            (),
            vec![on_input],
        )?;
        let button = create_element(
            "button",
            &[("id", "add-btn")],
            self.config.add_label.as_str(),
            vec![on_click],
        )?;

        create_element(
            "div",
            &[("class", "add-todo")],
            vec![input.into(), button.into()],
            Vec::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_passes_last_input_untrimmed() {
        let received = Rc::new(RefCell::new(Vec::<String>::new()));
        let sink = received.clone();
        let add = AddTask::new(
            Rc::new(move |text: String| sink.borrow_mut().push(text)),
            Rc::new(WidgetConfig::default()),
        );

        add.on_input("B".to_string());
        add.on_input("  Buy milk  ".to_string());
        add.submit();
        add.submit();

        assert_eq!(*received.borrow(), vec!["  Buy milk  ", "  Buy milk  "]);
    }
}
