//! REPL configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Configuration for an interactive session, usually read from TOML.
///
/// Every field is optional in the file:
///
/// ```toml
/// prompt = "ttt> "
/// show_board = true
/// show_status = true
/// log_filter = "warn,tictactoe_core=debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ReplConfig {
    /// Text printed before reading each command.
    #[serde(default = "default_prompt")]
    prompt: String,

    /// Draw the board before every prompt.
    #[serde(default = "default_true")]
    show_board: bool,

    /// Print the status line before every prompt.
    #[serde(default = "default_true")]
    show_status: bool,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_prompt() -> String {
    "> ".to_string()
}

fn default_true() -> bool {
    true
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            show_board: default_true(),
            show_status: default_true(),
            log_filter: default_log_filter(),
        }
    }
}

impl ReplConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(prompt = %config.prompt, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Overrides the tracing filter.
    pub fn with_log_filter(mut self, log_filter: impl Into<String>) -> Self {
        self.log_filter = log_filter.into();
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = ReplConfig::from_toml("").unwrap();
        assert_eq!(config, ReplConfig::default());
        assert_eq!(config.prompt(), "> ");
        assert!(*config.show_board());
    }

    #[test]
    fn test_partial_file() {
        let config = ReplConfig::from_toml("prompt = \"ttt> \"\nshow_board = false\n").unwrap();
        assert_eq!(config.prompt(), "ttt> ");
        assert!(!*config.show_board());
        assert!(*config.show_status());
        assert_eq!(config.log_filter(), "warn");
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_filter = \"debug\"").unwrap();
        let config = ReplConfig::from_file(file.path()).unwrap();
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ReplConfig::from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.message.starts_with("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_malformed_file() {
        let err = ReplConfig::from_toml("show_board = \"sometimes\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
    }

    #[test]
    fn test_log_filter_override() {
        let config = ReplConfig::default().with_log_filter("trace");
        assert_eq!(config.log_filter(), "trace");
    }
}
