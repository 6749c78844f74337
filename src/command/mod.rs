//! Command parsing and dispatch.
//!
//! [`parser`] turns a line into a [`Command`]; [`handler`] applies it to a
//! task list and turns every error into a message.

pub mod handler;
pub mod parser;

pub use handler::{execute, handle_input, Flow, Outcome};
pub use parser::{parse_command, tokenize, Command};
