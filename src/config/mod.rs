//! Configuration management for cro.
//!
//! This module handles loading configuration from `~/.cro/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, DisplayConfig, LoggingConfig, SavePolicy, StorageConfig};
