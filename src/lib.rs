//! cro - a line-oriented personal task list
//!
//! This crate reads one command per line, keeps an ordered list of todos,
//! deadlines and events, and persists it between runs.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod command;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod output;
pub mod session;
pub mod storage;
pub mod tasks;

pub use cli::Cli;
pub use command::{handle_input, Command, Flow, Outcome};
pub use error::CroError;
pub use session::{Session, SessionSummary};
pub use tasks::{Task, TaskList};
