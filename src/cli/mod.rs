//! Command-line interface for cro.

pub mod args;

pub use args::Cli;
