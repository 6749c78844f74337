//! Command dispatch.
//!
//! [`handle_input`] is the single place where command errors become
//! printed messages; nothing below it prints.

use tracing::{debug, warn};

use super::parser::{parse_command, Command};
use crate::error::CroError;
use crate::output::ui;
use crate::tasks::TaskList;

/// Whether the read loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Result of handling one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Text to print, either a confirmation or an error message.
    pub output: String,
    pub flow: Flow,
    /// The task list was modified.
    pub changed: bool,
    /// `output` is an error message.
    pub failed: bool,
}

impl Outcome {
    const fn ok(output: String, flow: Flow, changed: bool) -> Self {
        Self {
            output,
            flow,
            changed,
            failed: false,
        }
    }

    const fn error(output: String) -> Self {
        Self {
            output,
            flow: Flow::Continue,
            changed: false,
            failed: true,
        }
    }
}

/// Handle one raw input line against the task list.
///
/// Never fails: any error is turned into its message and the loop is told
/// to continue. Only `bye` stops it.
pub fn handle_input(line: &str, tasks: &mut TaskList) -> Outcome {
    match parse_command(line).and_then(|command| execute(command, tasks)) {
        Ok(outcome) => outcome,
        Err(e) => {
            if e.is_user_error() {
                debug!(error = %e, "command rejected");
            } else {
                warn!(error = %e, "command failed");
            }
            Outcome::error(e.to_string())
        }
    }
}

/// Apply an already parsed command to the task list.
///
/// # Errors
///
/// Returns the task list's error if an index is out of range or a record
/// is rejected. The list is left untouched in that case.
pub fn execute(command: Command, tasks: &mut TaskList) -> Result<Outcome, CroError> {
    debug!(?command, "executing");
    let changed = command.is_mutating();

    let output = match command {
        Command::Bye => return Ok(Outcome::ok(ui::farewell(), Flow::Stop, false)),
        Command::List => tasks.display_tasks(),
        Command::Mark(index) => ui::marked(tasks.mark_task_as_done(index)?),
        Command::Unmark(index) => ui::unmarked(tasks.mark_task_as_undone(index)?),
        Command::ToDo(record) => {
            let task = tasks.add_todo(&record)?.clone();
            ui::added(&task, tasks.len())
        }
        Command::Deadline(record) => {
            let task = tasks.add_deadline(&record)?.clone();
            ui::added(&task, tasks.len())
        }
        Command::Event(record) => {
            let task = tasks.add_event(&record)?.clone();
            ui::added(&task, tasks.len())
        }
        Command::Delete(index) => {
            let task = tasks.delete_task(index)?;
            ui::removed(&task, tasks.len())
        }
    };

    Ok(Outcome::ok(output, Flow::Continue, changed))
}
