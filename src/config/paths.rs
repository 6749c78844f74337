//! Path resolution for cro configuration and data files.
//!
//! All cro data is stored in `~/.cro/`:
//! - `config.yaml` - Main configuration file
//! - `tasks.jsonl` - The task list

use std::path::PathBuf;

use crate::error::CroError;

/// Paths to cro configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Config file: `~/.cro/config.yaml`
    pub config_file: PathBuf,
    /// Task list: `~/.cro/tasks.jsonl`
    pub data_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, CroError> {
        let home = std::env::var("HOME")
            .map_err(|_| CroError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".cro")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            data_file: root.join("tasks.jsonl"),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".cro"))
        })
    }
}
