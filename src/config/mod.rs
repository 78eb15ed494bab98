//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `STAKEHOLDER_MAP` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use stakeholder_map::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Saving to {}", config.storage.data_file.display());
//! ```

mod error;
mod export;
mod logging;
mod matrix;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use export::ExportConfig;
pub use logging::LoggingConfig;
pub use matrix::MatrixConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Saved document location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Report export location
    #[serde(default)]
    pub export: ExportConfig,

    /// Matrix container size
    #[serde(default)]
    pub matrix: MatrixConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `STAKEHOLDER_MAP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `STAKEHOLDER_MAP__STORAGE__DATA_FILE=/tmp/map.json` -> `storage.data_file`
    /// - `STAKEHOLDER_MAP__MATRIX__WIDTH=1024` -> `matrix.width = 1024`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("STAKEHOLDER_MAP")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for empty paths or file names, non-positive
    /// matrix extents, and unparseable log filters.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.storage.validate()?;
        self.export.validate()?;
        self.matrix.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
