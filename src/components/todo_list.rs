//! Todo List Component
//!
//! Root component: owns the tasks and rebuilds its whole subtree
//! (heading, input row, one row per task) after every change.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::add_task::{AddTask, OnAddTask};
use super::task::{OnDeleteTask, Task};
use crate::component::{Component, Slot};
use crate::config::WidgetConfig;
use crate::dom::{create_element, Child, View};
use crate::error::UiError;
use crate::logging;
use crate::models::TaskRecord;
use crate::store::TaskStore;

pub struct TodoList {
    tasks: RefCell<TaskStore>,
    config: Rc<WidgetConfig>,
    slot: Slot,
}

impl TodoList {
    pub fn new(config: Rc<WidgetConfig>) -> Rc<Self> {
        Rc::new(Self {
            tasks: RefCell::new(TaskStore::seeded(config.seed_tasks.iter().cloned())),
            config,
            slot: Slot::new(),
        })
    }

    /// Current tasks in display order
    pub fn tasks(&self) -> Vec<TaskRecord> {
        self.tasks.borrow().snapshot()
    }

    /// Add a task from raw input. Blank input is dropped without a
    /// re-render.
    pub fn on_add_task(self: &Rc<Self>, text: &str) -> Result<(), UiError> {
        let added = self.tasks.borrow_mut().add(text);
        if !added {
            logging::debug("TodoList", "ignored blank task");
            return Ok(());
        }
        logging::debug("TodoList", format!("added {:?}", text.trim()));
        self.update()
    }

    /// Handler deleting every task whose text matches `text`
    pub fn on_delete_task(self: &Rc<Self>, text: String) -> OnDeleteTask {
        let me: Weak<Self> = Rc::downgrade(self);
        Rc::new(move || {
            let Some(this) = me.upgrade() else { return };
            let removed = this.tasks.borrow_mut().remove_by_text(&text);
            logging::debug("TodoList", format!("deleted {} task(s) named {:?}", removed, text));
            if let Err(e) = this.update() {
                logging::error("TodoList", format!("update after delete failed: {}", e));
            }
        })
    }

    fn add_task_handler(self: &Rc<Self>) -> OnAddTask {
        let me: Weak<Self> = Rc::downgrade(self);
        Rc::new(move |text: String| {
            let Some(this) = me.upgrade() else { return };
            if let Err(e) = this.on_add_task(&text) {
                logging::error("TodoList", format!("update after add failed: {}", e));
            }
        })
    }
}

impl Component for TodoList {
    const NAME: &'static str = "TodoList";

    fn slot(&self) -> &Slot {
        &self.slot
    }

    fn render(self: &Rc<Self>) -> Result<View, UiError> {
        let heading = create_element("h1", &[], self.config.heading.as_str(), Vec::new())?;
        let add_task = AddTask::new(self.add_task_handler(), self.config.clone()).into_child()?;

        // Collect first so no borrow of the store is held while rows render
        let rows: Vec<_> = self
            .tasks
            .borrow()
            .iter()
            .map(|task| (task.clone(), task.borrow().text.clone()))
            .collect();
        let items = rows
            .into_iter()
            .map(|(task, text)| Task::new(task, self.on_delete_task(text), self.config.clone()).into_child())
            .collect::<Result<Vec<Child>, UiError>>()?;
        let list = create_element("ul", &[("id", "todos")], items, Vec::new())?;

        create_element(
            "div",
            &[("class", "todo-list")],
            vec![heading.into(), add_task, list.into()],
            Vec::new(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_leaves_tasks_untouched() {
        let list = TodoList::new(Rc::new(WidgetConfig::default()));
        let before = list.tasks();

        assert!(list.on_add_task("").is_ok());
        assert!(list.on_add_task("   ").is_ok());
        assert_eq!(list.tasks(), before);
    }

    #[test]
    fn test_add_before_mount_keeps_task_but_reports() {
        let list = TodoList::new(Rc::new(WidgetConfig::default()));
        let err = list.on_add_task("  Buy milk  ").unwrap_err();

        assert!(matches!(err, UiError::NotMounted("TodoList")));
        assert_eq!(list.tasks().last(), Some(&TaskRecord::new("Buy milk")));
    }

    #[test]
    fn test_seed_comes_from_config() {
        let config = WidgetConfig {
            seed_tasks: vec!["only".to_string()],
            ..WidgetConfig::default()
        };
        let list = TodoList::new(Rc::new(config));
        assert_eq!(list.tasks(), vec![TaskRecord::new("only")]);
    }
}
