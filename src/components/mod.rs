//! UI Components
//!
//! The root list and the two components it composes.

mod add_task;
mod task;
mod todo_list;

pub use add_task::{AddTask, OnAddTask};
pub use task::{DeleteCounter, OnDeleteTask, Task};
pub use todo_list::TodoList;
