//! Configuration management for Delver.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. Project-local `delver.toml` file
//! 3. User config `~/.config/delver/config.toml`
//! 4. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend endpoint configuration.
    pub backend: BackendConfig,

    /// Report export configuration.
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./delver.toml` (project local)
    /// 2. `~/.config/delver/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        // Try project-local config first
        if Path::new("delver.toml").exists() {
            return Self::from_file("delver.toml");
        }

        // Try user config
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("delver").join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        // Use defaults
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        // Apply environment variable overrides
        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("DELVER_BACKEND_URL") {
            self.backend.base_url = url;
        }
        if let Ok(secs) = std::env::var("DELVER_TIMEOUT_SECS") {
            if let Ok(n) = secs.parse() {
                self.backend.timeout_secs = n;
            }
        }
        if let Ok(tasks) = std::env::var("DELVER_MAX_TASKS") {
            if let Ok(n) = tasks.parse() {
                self.backend.max_tasks = n;
            }
        }
        if let Ok(dir) = std::env::var("DELVER_OUTPUT_DIR") {
            self.export.output_dir = dir;
        }
    }

    /// Validate the assembled configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("backend.base_url is empty".to_string()));
        }
        if !(MIN_MAX_TASKS..=MAX_MAX_TASKS).contains(&self.backend.max_tasks) {
            return Err(ConfigError::Invalid(format!(
                "backend.max_tasks must be between {} and {}, got {}",
                MIN_MAX_TASKS, MAX_MAX_TASKS, self.backend.max_tasks
            )));
        }
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Backend endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL of the research backend.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Default research depth (number of search tasks, 3-10).
    pub max_tasks: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_tasks: DEFAULT_MAX_TASKS,
        }
    }
}

/// Report export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported reports are written to.
    pub output_dir: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.backend.base_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.backend.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.backend.max_tasks, DEFAULT_MAX_TASKS);
        assert_eq!(config.export.output_dir, DEFAULT_OUTPUT_DIR);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[backend]"));
        assert!(toml_str.contains("[export]"));
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[backend]
base_url = "http://research.internal:9000"
max_tasks = 8

[export]
output_dir = "reports"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend.base_url, "http://research.internal:9000");
        assert_eq!(config.backend.max_tasks, 8);
        // Unset fields keep their defaults
        assert_eq!(config.backend.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.export.output_dir, "reports");
    }

    #[test]
    fn test_validate_max_tasks_range() {
        let mut config = Config::default();
        config.backend.max_tasks = 2;
        assert!(config.validate().is_err());

        config.backend.max_tasks = 11;
        assert!(config.validate().is_err());

        config.backend.max_tasks = 10;
        assert!(config.validate().is_ok());
    }
}
