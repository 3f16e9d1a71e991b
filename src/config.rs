//! Configuration management for the POS terminal
//!
//! Settings come from built-in defaults, an optional TOML file and `POS_*`
//! environment variables, in increasing order of precedence.

use std::path::PathBuf;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::auth::{QuickLogin, default_quick_logins};

/// Config file used when `POS_CONFIG` is not set (`pos.toml`).
pub const DEFAULT_CONFIG_FILE: &str = "pos";

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "POS_CONFIG";

/// Complete terminal configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PosConfig {
    /// Default log filter; `RUST_LOG` takes precedence.
    /// Environment: POS_LOG_LEVEL
    pub log_level: String,

    /// Directory holding `users.json` and `products.json`. Built-in demo
    /// data is served when unset.
    /// Environment: POS_DATA_DIR
    pub data_dir: Option<PathBuf>,

    /// Label appended to every displayed amount
    pub currency: String,

    /// Upper bound on username and password length at the login form
    pub max_username_length: usize,

    /// One-click logins offered on the login screen
    pub quick_logins: Vec<QuickLogin>,
}

impl Default for PosConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            data_dir: None,
            currency: "EGP".to_string(),
            max_username_length: 64,
            quick_logins: default_quick_logins(),
        }
    }
}

impl PosConfig {
    /// Load configuration from `POS_CONFIG` (or `pos.toml`) with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&path)
    }

    /// Load configuration from the given file; a missing file is not an error
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("POS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: PosConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_username_length == 0 {
            return Err(ConfigError::Message(
                "max_username_length must be greater than 0".into(),
            ));
        }

        if self.currency.trim().is_empty() {
            return Err(ConfigError::Message("currency cannot be empty".into()));
        }

        if let Some(preset) = self
            .quick_logins
            .iter()
            .find(|p| p.username.is_empty() || p.password.is_empty())
        {
            return Err(ConfigError::Message(format!(
                "quick login '{}' needs a username and password",
                preset.label
            )));
        }

        Ok(())
    }
}
