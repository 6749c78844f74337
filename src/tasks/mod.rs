//! Tasks and the task list they live in.

mod list;
mod types;

pub use list::{parse_index, TaskList};
pub use types::{Task, TaskDetails, TaskKind};
