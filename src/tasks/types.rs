use chrono::NaiveDateTime;

use crate::core::{parse_canonical, to_canonical, to_display};
use crate::error::CroError;

/// The three kinds of task, without their data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    ToDo,
    Deadline,
    Event,
}

impl TaskKind {
    /// Single-letter code used in records and in the rendered `[T]` tag.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::ToDo => "T",
            Self::Deadline => "D",
            Self::Event => "E",
        }
    }

    /// Look up a kind by its record code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "T" => Some(Self::ToDo),
            "D" => Some(Self::Deadline),
            "E" => Some(Self::Event),
            _ => None,
        }
    }

    /// Number of fields in a record of this kind.
    #[must_use]
    pub const fn record_len(&self) -> usize {
        match self {
            Self::ToDo => 3,
            Self::Deadline => 4,
            Self::Event => 5,
        }
    }
}

impl std::fmt::Display for TaskKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::ToDo => "todo",
            Self::Deadline => "deadline",
            Self::Event => "event",
        })
    }
}

/// Kind-specific data carried by a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDetails {
    ToDo,
    Deadline { by: NaiveDateTime },
    Event { from: NaiveDateTime, to: NaiveDateTime },
}

impl TaskDetails {
    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        match self {
            Self::ToDo => TaskKind::ToDo,
            Self::Deadline { .. } => TaskKind::Deadline,
            Self::Event { .. } => TaskKind::Event,
        }
    }
}

/// A single entry in the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub description: String,
    pub is_done: bool,
    pub details: TaskDetails,
}

impl Task {
    /// Create a not-done todo.
    ///
    /// # Errors
    ///
    /// Returns [`CroError::EmptyDescription`] if the description is blank.
    pub fn todo(description: &str) -> Result<Self, CroError> {
        Self::new(description, TaskDetails::ToDo)
    }

    /// Create a not-done deadline.
    ///
    /// # Errors
    ///
    /// Returns [`CroError::EmptyDescription`] if the description is blank.
    pub fn deadline(description: &str, by: NaiveDateTime) -> Result<Self, CroError> {
        Self::new(description, TaskDetails::Deadline { by })
    }

    /// Create a not-done event.
    ///
    /// # Errors
    ///
    /// Returns [`CroError::EmptyDescription`] if the description is blank, or
    /// [`CroError::EventEndsBeforeStart`] if `to` precedes `from`.
    pub fn event(
        description: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Self, CroError> {
        if to < from {
            return Err(CroError::EventEndsBeforeStart);
        }
        Self::new(description, TaskDetails::Event { from, to })
    }

    fn new(description: &str, details: TaskDetails) -> Result<Self, CroError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(CroError::EmptyDescription(details.kind()));
        }
        Ok(Self {
            description: description.to_string(),
            is_done: false,
            details,
        })
    }

    #[must_use]
    pub const fn kind(&self) -> TaskKind {
        self.details.kind()
    }

    pub fn mark_as_done(&mut self) {
        self.is_done = true;
    }

    pub fn mark_as_undone(&mut self) {
        self.is_done = false;
    }

    #[must_use]
    pub const fn status_icon(&self) -> &'static str {
        if self.is_done {
            "X"
        } else {
            " "
        }
    }

    /// Build a task from a `[type, doneFlag, description, ...dates]` record.
    ///
    /// Dates must already be in canonical form.
    ///
    /// # Errors
    ///
    /// Returns [`CroError::MalformedRecord`] for an unknown type code, a bad
    /// done flag or the wrong number of fields, and the usual task
    /// construction errors otherwise.
    pub fn from_record<S: AsRef<str>>(record: &[S]) -> Result<Self, CroError> {
        let fields: Vec<&str> = record.iter().map(AsRef::<str>::as_ref).collect();
        let malformed = || CroError::MalformedRecord(format!("{fields:?}"));

        let kind = fields
            .first()
            .and_then(|code| TaskKind::from_code(code))
            .ok_or_else(malformed)?;
        if fields.len() != kind.record_len() {
            return Err(malformed());
        }

        let is_done = match fields[1] {
            "0" => false,
            "1" => true,
            _ => return Err(malformed()),
        };
        let description = fields[2];

        let mut task = match kind {
            TaskKind::ToDo => Self::todo(description)?,
            TaskKind::Deadline => Self::deadline(description, parse_canonical(fields[3])?)?,
            TaskKind::Event => Self::event(
                description,
                parse_canonical(fields[3])?,
                parse_canonical(fields[4])?,
            )?,
        };
        task.is_done = is_done;
        Ok(task)
    }

    /// The record form of this task, with dates in canonical form.
    #[must_use]
    pub fn to_record(&self) -> Vec<String> {
        let mut record = vec![
            self.kind().code().to_string(),
            if self.is_done { "1" } else { "0" }.to_string(),
            self.description.clone(),
        ];
        match &self.details {
            TaskDetails::ToDo => {}
            TaskDetails::Deadline { by } => record.push(to_canonical(by)),
            TaskDetails::Event { from, to } => {
                record.push(to_canonical(from));
                record.push(to_canonical(to));
            }
        }
        record
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}][{}] {}",
            self.kind().code(),
            self.status_icon(),
            self.description
        )?;
        match &self.details {
            TaskDetails::ToDo => Ok(()),
            TaskDetails::Deadline { by } => write!(f, " (by: {})", to_display(by)),
            TaskDetails::Event { from, to } => {
                write!(f, " (from: {} to: {})", to_display(from), to_display(to))
            }
        }
    }
}
