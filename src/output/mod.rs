//! Output formatting for cro.
//!
//! Plain message text lives in [`ui`]; [`pretty`] decorates it for the
//! terminal.

mod pretty;
pub mod ui;

pub use pretty::*;
