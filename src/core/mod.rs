//! Core abstractions for cro.
//!
//! Date conversion shared by the command parser, task rendering and storage.

mod datetime;

pub use datetime::{parse_canonical, parse_input_datetime, to_canonical, to_display};
