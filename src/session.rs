//! The interactive read loop.
//!
//! A [`Session`] owns the task list for the lifetime of the program. It
//! reads one command per line, prints each outcome and persists the list
//! through a [`TaskStorage`] according to the configured [`SavePolicy`].

use std::borrow::Cow;
use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use crate::command::{handle_input, Flow};
use crate::config::SavePolicy;
use crate::error::CroError;
use crate::output::{format_banner_pretty, format_error_pretty, ui};
use crate::storage::TaskStorage;
use crate::tasks::TaskList;

/// What happened during a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Lines handled, including the final `bye`.
    pub commands: usize,
    /// The session ended with `bye` rather than end of input.
    pub said_bye: bool,
}

pub struct Session<S: TaskStorage> {
    tasks: TaskList,
    storage: S,
    save_policy: SavePolicy,
    banners: bool,
    color: bool,
    /// Changes not yet written to storage.
    dirty: bool,
}

impl<S: TaskStorage> Session<S> {
    /// Start a session, hydrating the task list from `storage`.
    ///
    /// # Errors
    ///
    /// Returns an error if stored tasks exist but cannot be loaded.
    pub fn open(storage: S, save_policy: SavePolicy) -> Result<Self, CroError> {
        let tasks = TaskList::from_tasks(storage.load()?);
        info!(count = tasks.len(), ?save_policy, "session opened");
        Ok(Self {
            tasks,
            storage,
            save_policy,
            banners: true,
            color: false,
            dirty: false,
        })
    }

    /// Print the welcome and farewell banners (on by default).
    #[must_use]
    pub fn with_banners(mut self, banners: bool) -> Self {
        self.banners = banners;
        self
    }

    /// Decorate output with terminal colors (off by default).
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Run until `bye` or end of input.
    ///
    /// Command errors are printed and the loop carries on. A failed save
    /// after a command is reported the same way and retried at exit. Input
    /// that is not valid UTF-8 is decoded lossily and handled like any other
    /// line.
    ///
    /// Unsaved changes are written back before any error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails, or if the
    /// final save fails.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut reader: R,
        mut writer: W,
    ) -> Result<SessionSummary, CroError> {
        let mut summary = SessionSummary {
            commands: 0,
            said_bye: false,
        };

        let looped = self.read_loop(&mut reader, &mut writer, &mut summary);
        if let Err(e) = &looped {
            warn!(error = %e, "session interrupted");
        } else if !summary.said_bye {
            debug!("input closed without bye");
        }

        let saved = if self.dirty { self.persist() } else { Ok(()) };
        let flushed = writer.flush().map_err(CroError::from);
        looped.and(saved).and(flushed)?;

        info!(commands = summary.commands, said_bye = summary.said_bye, "session closed");
        Ok(summary)
    }

    fn read_loop<R: BufRead, W: Write>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
        summary: &mut SessionSummary,
    ) -> Result<(), CroError> {
        if self.banners {
            self.print_banner(writer, &ui::welcome())?;
        }

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                return Ok(());
            }
            let line = decode_line(&buf);
            summary.commands += 1;

            let outcome = handle_input(&line, &mut self.tasks);
            self.dirty |= outcome.changed;

            if outcome.flow == Flow::Stop {
                summary.said_bye = true;
                if self.banners {
                    self.print_banner(writer, &outcome.output)?;
                }
                return Ok(());
            }

            if outcome.failed {
                self.print_error(writer, &outcome.output)?;
            } else {
                writeln!(writer, "{}", outcome.output)?;
            }

            if outcome.changed && self.save_policy == SavePolicy::EveryChange {
                if let Err(e) = self.persist() {
                    warn!(error = %e, "save failed, will retry at exit");
                    self.print_error(writer, &e.to_string())?;
                }
            }
        }
    }

    fn persist(&mut self) -> Result<(), CroError> {
        self.storage.save(self.tasks.tasks())?;
        self.dirty = false;
        Ok(())
    }

    fn print_banner<W: Write>(&self, writer: &mut W, banner: &str) -> Result<(), CroError> {
        if self.color {
            writeln!(writer, "{}", format_banner_pretty(banner))?;
        } else {
            writeln!(writer, "{banner}")?;
        }
        Ok(())
    }

    fn print_error<W: Write>(&self, writer: &mut W, message: &str) -> Result<(), CroError> {
        if self.color {
            writeln!(writer, "{}", format_error_pretty(message))?;
        } else {
            writeln!(writer, "{message}")?;
        }
        Ok(())
    }
}

/// One input line without its line ending.
fn decode_line(bytes: &[u8]) -> Cow<'_, str> {
    let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    let line = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = line {
        warn!("input line is not valid UTF-8");
    }
    line
}
