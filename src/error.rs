//! Error types for cro.

use thiserror::Error;

use crate::tasks::TaskKind;

/// Every failure a command, the storage layer or startup can produce.
///
/// Command errors are user-facing: their `Display` text is printed as-is by
/// the session loop, so messages are single-line and unprefixed.
#[derive(Debug, Error)]
pub enum CroError {
    #[error("Unknown command. Please try again.")]
    UnknownCommand,

    #[error("deadline not found, please include with '/by' as an indicator.")]
    MissingDeadline,

    #[error("event timings not found, please use /from and /to to indicate.")]
    MissingEventTimings,

    #[error("'/from' must come before '/to'.")]
    EventMarkersOutOfOrder,

    #[error("an event cannot end before it starts.")]
    EventEndsBeforeStart,

    #[error("invalid date '{0}', please use the format yyyy M d HH mm (e.g. 2024 3 5 18 00).")]
    InvalidDate(String),

    #[error("{0} description cannot be empty.")]
    EmptyDescription(TaskKind),

    #[error("please provide a task number.")]
    MissingIndex,

    #[error("'{0}' is not a valid task number.")]
    InvalidIndex(String),

    #[error("task {index} not found, you have {len} task(s) in the list.")]
    TaskNotFound { index: i64, len: usize },

    #[error("malformed task record: {0}")]
    MalformedRecord(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CroError {
    /// Whether this error came from user input rather than the environment.
    ///
    /// User errors are reported and the session carries on; the others are
    /// logged at a higher level.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Self::MalformedRecord(_) | Self::Storage(_) | Self::Config(_) | Self::Io(_)
        )
    }
}
