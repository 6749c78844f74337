//! Storage layer for cro.
//!
//! The session only sees [`TaskStorage`]; the file format is an implementation
//! detail of [`FileStorage`].

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::CroError;
use crate::tasks::Task;

/// Loads the task list at startup and saves it back.
pub trait TaskStorage {
    /// Load every task, in list order. Missing data is an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if stored data exists but cannot be read or parsed.
    fn load(&self) -> Result<Vec<Task>, CroError>;

    /// Replace the stored tasks. Readers never observe a partial write.
    ///
    /// # Errors
    ///
    /// Returns an error if the tasks cannot be written.
    fn save(&self, tasks: &[Task]) -> Result<(), CroError>;
}
