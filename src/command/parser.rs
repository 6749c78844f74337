//! Command line parsing.
//!
//! Turns one line of input into a [`Command`]. Date conversion happens here,
//! once, so every record handed to the task list already carries canonical
//! timestamps.

use crate::core::{parse_input_datetime, to_canonical};
use crate::error::CroError;
use crate::tasks::{parse_index, TaskKind};

const BY_MARKER: &str = "/by";
const FROM_MARKER: &str = "/from";
const TO_MARKER: &str = "/to";

/// A fully validated command.
///
/// Add commands carry the `[type, doneFlag, description, ...dates]` record
/// that the task list builds the task from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bye,
    List,
    Mark(i64),
    Unmark(i64),
    Delete(i64),
    ToDo(Vec<String>),
    Deadline(Vec<String>),
    Event(Vec<String>),
}

impl Command {
    /// Whether running this command can change the task list.
    #[must_use]
    pub const fn is_mutating(&self) -> bool {
        !matches!(self, Self::Bye | Self::List)
    }
}

/// Split a line on runs of whitespace.
#[must_use]
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

/// Parse one input line.
///
/// The verb is matched exactly and case-sensitively. A blank line has an
/// empty verb and is therefore unknown.
///
/// # Errors
///
/// Returns the validation error of the matched verb, or
/// [`CroError::UnknownCommand`].
pub fn parse_command(line: &str) -> Result<Command, CroError> {
    let tokens = tokenize(line);
    let (verb, args) = tokens.split_first().map_or(("", &[][..]), |(v, a)| (*v, a));

    match verb {
        "bye" => Ok(Command::Bye),
        "list" => Ok(Command::List),
        "mark" => parse_index(args).map(Command::Mark),
        "unmark" => parse_index(args).map(Command::Unmark),
        "delete" => parse_index(args).map(Command::Delete),
        "todo" => todo_record(args).map(Command::ToDo),
        "deadline" => convert_date_deadline(args).map(Command::Deadline),
        "event" => convert_date_event(args).map(Command::Event),
        _ => Err(CroError::UnknownCommand),
    }
}

/// Build a todo record from the argument tokens.
///
/// # Errors
///
/// Returns [`CroError::EmptyDescription`] when there are no tokens.
pub fn todo_record(args: &[&str]) -> Result<Vec<String>, CroError> {
    let description = description(args, TaskKind::ToDo)?;
    Ok(record(TaskKind::ToDo, description, &[]))
}

/// Build a deadline record from `description /by yyyy M d HH mm`.
///
/// The first `/by` splits the description from the date.
///
/// # Errors
///
/// Returns [`CroError::MissingDeadline`] without a `/by` marker,
/// [`CroError::EmptyDescription`] when nothing precedes it, and
/// [`CroError::InvalidDate`] when the date does not match the input format.
pub fn convert_date_deadline(args: &[&str]) -> Result<Vec<String>, CroError> {
    let by_idx = find_marker(args, BY_MARKER).ok_or(CroError::MissingDeadline)?;

    let description = description(&args[..by_idx], TaskKind::Deadline)?;
    let by = parse_input_datetime(&args[by_idx + 1..])?;

    Ok(record(TaskKind::Deadline, description, &[to_canonical(&by)]))
}

/// Build an event record from `description /from <date> /to <date>`.
///
/// The start date is every token strictly between the first `/from` and the
/// first `/to`; the end date is every token after `/to`. Both spans are
/// sliced from the untouched argument list, so neither lookup can shift the
/// other.
///
/// # Errors
///
/// Returns [`CroError::MissingEventTimings`] if either marker is absent,
/// [`CroError::EventMarkersOutOfOrder`] if `/to` comes first,
/// [`CroError::EmptyDescription`], [`CroError::InvalidDate`], or
/// [`CroError::EventEndsBeforeStart`].
pub fn convert_date_event(args: &[&str]) -> Result<Vec<String>, CroError> {
    let (from_idx, to_idx) = find_marker(args, FROM_MARKER)
        .zip(find_marker(args, TO_MARKER))
        .ok_or(CroError::MissingEventTimings)?;
    if to_idx < from_idx {
        return Err(CroError::EventMarkersOutOfOrder);
    }

    let description = description(&args[..from_idx], TaskKind::Event)?;
    let from = parse_input_datetime(&args[from_idx + 1..to_idx])?;
    let to = parse_input_datetime(&args[to_idx + 1..])?;
    if to < from {
        return Err(CroError::EventEndsBeforeStart);
    }

    Ok(record(
        TaskKind::Event,
        description,
        &[to_canonical(&from), to_canonical(&to)],
    ))
}

fn find_marker(args: &[&str], marker: &str) -> Option<usize> {
    args.iter().position(|&token| token == marker)
}

fn description(tokens: &[&str], kind: TaskKind) -> Result<String, CroError> {
    if tokens.is_empty() {
        return Err(CroError::EmptyDescription(kind));
    }
    Ok(tokens.join(" "))
}

fn record(kind: TaskKind, description: String, dates: &[String]) -> Vec<String> {
    let mut record = vec![kind.code().to_string(), "0".to_string(), description];
    record.extend_from_slice(dates);
    record
}
