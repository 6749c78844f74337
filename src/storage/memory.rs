use std::cell::{Cell, RefCell};

use super::TaskStorage;
use crate::error::CroError;
use crate::tasks::Task;

/// In-memory storage, for tests and for running without a data file.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tasks: RefCell<Vec<Task>>,
    saves: Cell<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: RefCell::new(tasks),
            saves: Cell::new(0),
        }
    }

    /// Snapshot of the last saved tasks.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.tasks.borrow().clone()
    }

    /// Number of times [`TaskStorage::save`] has been called.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl TaskStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Task>, CroError> {
        Ok(self.tasks())
    }

    fn save(&self, tasks: &[Task]) -> Result<(), CroError> {
        *self.tasks.borrow_mut() = tasks.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
