//! Configuration settings for cro.
//!
//! Settings are loaded from `~/.cro/config.yaml`.

use std::path::PathBuf;

use serde::Deserialize;

use crate::config::Paths;
use crate::error::CroError;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Where and when the task list is saved.
    pub storage: StorageConfig,
    /// Console output settings.
    pub display: DisplayConfig,
    /// Diagnostic logging settings.
    pub logging: LoggingConfig,
}

/// Storage settings.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    /// Data file; `~/.cro/tasks.jsonl` when unset.
    pub data_file: Option<PathBuf>,
    /// When to write the task list back.
    pub save_policy: SavePolicy,
}

/// When the session persists the task list.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SavePolicy {
    /// Save after every command that changes the list.
    #[default]
    EveryChange,
    /// Save once when the session ends.
    OnExit,
}

/// Console output settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
    /// Print the welcome and farewell banners.
    #[serde(default = "default_true")]
    pub banners: bool,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when neither `RUST_LOG` nor `CRO_LOG` is set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions for serde
const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            banners: default_true(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, CroError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            CroError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            CroError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// The data file to use, falling back to the one under `paths`.
    #[must_use]
    pub fn data_file(&self, paths: &Paths) -> PathBuf {
        self.storage
            .data_file
            .clone()
            .unwrap_or_else(|| paths.data_file.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.storage.save_policy, SavePolicy::EveryChange);
        assert_eq!(config.storage.data_file, None);
        assert_eq!(config.display.color, ColorSetting::Auto);
        assert!(config.display.banners);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        let yaml = r"
storage:
  data_file: /tmp/elsewhere.jsonl
  save_policy: on_exit
display:
  color: never
  banners: false
logging:
  level: debug
";
        std::fs::write(&config_path, yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(
            config.storage.data_file,
            Some(PathBuf::from("/tmp/elsewhere.jsonl"))
        );
        assert_eq!(config.storage.save_policy, SavePolicy::OnExit);
        assert_eq!(config.display.color, ColorSetting::Never);
        assert!(!config.display.banners);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
storage:
  save_policy: on_exit
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.storage.save_policy, SavePolicy::OnExit);
        // Defaults should be used for missing fields
        assert!(config.display.banners);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        std::fs::write(&config_path, "storage:\n  save_policy: sometimes\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, CroError::Config(_)));
    }

    #[test]
    fn test_data_file_fallback() {
        let paths = Paths::with_root(PathBuf::from("/tmp/cro-root"));
        let mut config = Config::default();
        assert_eq!(config.data_file(&paths), paths.data_file);

        config.storage.data_file = Some(PathBuf::from("/tmp/elsewhere.jsonl"));
        assert_eq!(config.data_file(&paths), PathBuf::from("/tmp/elsewhere.jsonl"));
    }
}
