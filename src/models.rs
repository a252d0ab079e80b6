//! Task Models
//!
//! The `{text, done}` record behind every row of the list.

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::rc::Rc;

/// One TODO entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl TaskRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }
}

/// A record shared between the list that owns it and the row rendering it
pub type SharedTask = Rc<RefCell<TaskRecord>>;

pub fn share(record: TaskRecord) -> SharedTask {
    Rc::new(RefCell::new(record))
}
