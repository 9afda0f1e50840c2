//! # casetrack-config
//!
//! Layered configuration loading for casetrack using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CASETRACK_*` prefix, `__` as separator)
//! 2. Project-level `./casetrack.toml`
//! 3. User-level `~/.config/casetrack/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CASETRACK_SERVER__PORT` -> `server.port`,
//! `CASETRACK_FILES__BASE_URL` -> `files.base_url`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use casetrack_config::CasetrackConfig;
//!
//! let config = CasetrackConfig::load_with_dotenv().expect("config");
//! println!("listening on {}", config.server.socket_addr());
//! ```

mod database;
mod error;
mod files;
mod general;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use files::FilesConfig;
pub use general::GeneralConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name of the project-local config.
pub const PROJECT_CONFIG_FILE: &str = "casetrack.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CasetrackConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub files: FilesConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CasetrackConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CASETRACK_").split("__"))
    }

    /// Reject values that would only fail later at bind or response time.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue {
                field: "server.port".into(),
                reason: "port must be non-zero".into(),
            });
        }
        if !self.files.has_http_scheme() {
            return Err(ConfigError::InvalidValue {
                field: "files.base_url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.files.base_url),
            });
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "path must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("casetrack").join("config.toml"))
    }
}
