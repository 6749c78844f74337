use tracing::debug;

use super::types::{Task, TaskKind};
use crate::error::CroError;

/// Parse the first argument of `mark`, `unmark` or `delete` as a 1-based index.
///
/// No bounds check happens here; that needs the list.
///
/// # Errors
///
/// Returns [`CroError::MissingIndex`] when there is no argument and
/// [`CroError::InvalidIndex`] when it is not an integer.
pub fn parse_index<S: AsRef<str>>(args: &[S]) -> Result<i64, CroError> {
    let raw = args.first().map(AsRef::<str>::as_ref).ok_or(CroError::MissingIndex)?;
    raw.parse::<i64>()
        .map_err(|_| CroError::InvalidIndex(raw.to_string()))
}

/// The ordered task list.
///
/// Position `i - 1` in the underlying vector is task `i` as shown to the
/// user. Nothing stores the index, so removals renumber implicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap tasks loaded from storage, keeping their order.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by its 1-based index.
    #[must_use]
    pub fn get(&self, index: i64) -> Option<&Task> {
        self.position(index).ok().map(|pos| &self.tasks[pos])
    }

    /// Render every task with its 1-based index.
    #[must_use]
    pub fn display_tasks(&self) -> String {
        if self.tasks.is_empty() {
            return "There are no tasks in your list.".to_string();
        }

        let mut output = String::from("Here are the tasks in your list:");
        for (i, task) in self.tasks.iter().enumerate() {
            output.push_str(&format!("\n{}.{task}", i + 1));
        }
        output
    }

    /// Mark task `index` as done. Marking a done task again is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CroError::TaskNotFound`] if `index` is out of range.
    pub fn mark_task_as_done(&mut self, index: i64) -> Result<&Task, CroError> {
        let pos = self.position(index)?;
        let task = &mut self.tasks[pos];
        task.mark_as_done();
        debug!(index, "marked task as done");
        Ok(task)
    }

    /// Mark task `index` as not done. Idempotent like [`Self::mark_task_as_done`].
    ///
    /// # Errors
    ///
    /// Returns [`CroError::TaskNotFound`] if `index` is out of range.
    pub fn mark_task_as_undone(&mut self, index: i64) -> Result<&Task, CroError> {
        let pos = self.position(index)?;
        let task = &mut self.tasks[pos];
        task.mark_as_undone();
        debug!(index, "marked task as not done");
        Ok(task)
    }

    /// Append a todo built from a `["T", "0", description]` record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not a valid todo record.
    pub fn add_todo<S: AsRef<str>>(&mut self, record: &[S]) -> Result<&Task, CroError> {
        self.add_record(record, TaskKind::ToDo)
    }

    /// Append a deadline built from a `["D", "0", description, by]` record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not a valid deadline record.
    pub fn add_deadline<S: AsRef<str>>(&mut self, record: &[S]) -> Result<&Task, CroError> {
        self.add_record(record, TaskKind::Deadline)
    }

    /// Append an event built from a `["E", "0", description, from, to]` record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record is not a valid event record.
    pub fn add_event<S: AsRef<str>>(&mut self, record: &[S]) -> Result<&Task, CroError> {
        self.add_record(record, TaskKind::Event)
    }

    /// Remove task `index` and hand it back. Later tasks move down by one.
    ///
    /// # Errors
    ///
    /// Returns [`CroError::TaskNotFound`] if `index` is out of range.
    pub fn delete_task(&mut self, index: i64) -> Result<Task, CroError> {
        let pos = self.position(index)?;
        let task = self.tasks.remove(pos);
        debug!(index, remaining = self.tasks.len(), "deleted task");
        Ok(task)
    }

    fn add_record<S: AsRef<str>>(
        &mut self,
        record: &[S],
        expected: TaskKind,
    ) -> Result<&Task, CroError> {
        let mut task = Task::from_record(record)?;
        if task.kind() != expected {
            return Err(CroError::MalformedRecord(format!(
                "expected a {expected} record, got a {}",
                task.kind()
            )));
        }
        // New tasks always start out not done.
        task.is_done = false;

        self.tasks.push(task);
        debug!(kind = %expected, index = self.tasks.len(), "added task");
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Translate a 1-based index into a vector position.
    fn position(&self, index: i64) -> Result<usize, CroError> {
        usize::try_from(index)
            .ok()
            .filter(|&i| (1..=self.tasks.len()).contains(&i))
            .map(|i| i - 1)
            .ok_or(CroError::TaskNotFound {
                index,
                len: self.tasks.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(descriptions: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for &d in descriptions {
            list.add_todo(&["T", "0", d]).unwrap();
        }
        list
    }

    fn descriptions(list: &TaskList) -> Vec<&str> {
        list.tasks().iter().map(|t| t.description.as_str()).collect()
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index(&["3"]).unwrap(), 3);
        assert_eq!(parse_index(&["-1"]).unwrap(), -1);
        assert!(matches!(parse_index::<&str>(&[]), Err(CroError::MissingIndex)));
        assert!(matches!(parse_index(&["two"]), Err(CroError::InvalidIndex(ref s)) if s == "two"));
    }

    #[test]
    fn test_added_index_equals_len() {
        let mut list = TaskList::new();
        for (i, name) in ["a", "b", "c"].into_iter().enumerate() {
            list.add_todo(&["T", "0", name]).unwrap();
            assert_eq!(list.len(), i + 1);
            assert_eq!(list.get(i64::try_from(i).unwrap() + 1).unwrap().description, name);
        }
    }

    #[test]
    fn test_add_forces_not_done() {
        let mut list = TaskList::new();
        let task = list.add_todo(&["T", "1", "read book"]).unwrap();
        assert!(!task.is_done);
    }

    #[test]
    fn test_add_rejects_mismatched_kind() {
        let mut list = TaskList::new();
        let result = list.add_deadline(&["T", "0", "read book"]);
        assert!(matches!(result, Err(CroError::MalformedRecord(_))));
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_deadline_and_event() {
        let mut list = TaskList::new();
        list.add_deadline(&["D", "0", "submit report", "2024-03-05T18:00"]).unwrap();
        list.add_event(&["E", "0", "party", "2019-10-15T18:00", "2019-10-15T20:00"]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().kind(), TaskKind::Deadline);
        assert_eq!(list.get(2).unwrap().kind(), TaskKind::Event);
    }

    #[test]
    fn test_display_tasks() {
        let list = list_of(&["read book", "return book"]);
        assert_eq!(
            list.display_tasks(),
            "Here are the tasks in your list:\n1.[T][ ] read book\n2.[T][ ] return book"
        );
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(TaskList::new().display_tasks(), "There are no tasks in your list.");
    }

    #[test]
    fn test_mark_only_touches_given_index() {
        let mut list = list_of(&["a", "b", "c"]);
        list.mark_task_as_done(2).unwrap();
        let done: Vec<bool> = list.tasks().iter().map(|t| t.is_done).collect();
        assert_eq!(done, vec![false, true, false]);
    }

    #[test]
    fn test_mark_is_idempotent() {
        let mut once = list_of(&["a", "b"]);
        once.mark_task_as_done(1).unwrap();

        let mut cycled = list_of(&["a", "b"]);
        cycled.mark_task_as_done(1).unwrap();
        cycled.mark_task_as_undone(1).unwrap();
        cycled.mark_task_as_done(1).unwrap();
        cycled.mark_task_as_done(1).unwrap();

        assert_eq!(once, cycled);
    }

    #[test]
    fn test_unmark_restores_state() {
        let original = list_of(&["a", "b"]);
        let mut list = original.clone();
        list.mark_task_as_done(2).unwrap();
        list.mark_task_as_undone(2).unwrap();
        assert_eq!(list, original);
    }

    #[test]
    fn test_mark_out_of_range() {
        let mut list = list_of(&["a", "b"]);
        let original = list.clone();
        for index in [0, -1, 3, 5] {
            let err = list.mark_task_as_done(index).unwrap_err();
            assert!(matches!(err, CroError::TaskNotFound { len: 2, .. }));
        }
        assert_eq!(list, original);
    }

    #[test]
    fn test_delete_shifts_later_tasks() {
        for i in 1..=4 {
            let mut list = list_of(&["a", "b", "c", "d"]);
            let mut expected = vec!["a", "b", "c", "d"];
            let removed = list.delete_task(i).unwrap();
            let pos = usize::try_from(i - 1).unwrap();
            assert_eq!(removed.description, expected.remove(pos));
            assert_eq!(descriptions(&list), expected);
        }
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut list = list_of(&["a"]);
        assert!(list.delete_task(2).is_err());
        assert!(list.delete_task(0).is_err());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_delete_from_empty() {
        let mut list = TaskList::new();
        let err = list.delete_task(1).unwrap_err();
        assert!(matches!(err, CroError::TaskNotFound { index: 1, len: 0 }));
    }
}
