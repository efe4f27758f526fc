//! # aidev-config
//!
//! Layered configuration loading for the AIDev labeling pipeline using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AIDEV_*` prefix, `__` as separator)
//! 2. Project-level `.aidev/config.toml`
//! 3. User-level `~/.config/aidev/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `AIDEV_SOURCES__TASK_TYPES` -> `sources.task_types`,
//! `AIDEV_OUTPUT__DIR` -> `output.dir`, and so on.
//!
//! # Usage
//!
//! ```no_run
//! use aidev_config::AidevConfig;
//!
//! let config = AidevConfig::load_with_dotenv().expect("config");
//! println!("writing to {}", config.output.dir);
//! ```

mod error;
mod labeling;
mod output;
mod sources;

pub use error::ConfigError;
pub use labeling::LabelingConfig;
pub use output::OutputConfig;
pub use sources::SourcesConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct AidevConfig {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub labeling: LabelingConfig,
}

impl AidevConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a provider fails to parse and
    /// [`ConfigError::InvalidValue`] when a loaded value is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".aidev/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("AIDEV_").split("__"))
    }

    /// Check values that deserialize fine but cannot drive a run.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty source location or
    /// output directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sources.validate()?;
        if self.output.dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "output.dir".to_string(),
                reason: "output directory must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("aidev").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AidevConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.dir, ".");
        assert_eq!(config.labeling.keywords_file(), None);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = Figment::from(Serialized::defaults(AidevConfig::default()));
        let config: AidevConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config, AidevConfig::default());
    }

    #[test]
    fn empty_output_dir_is_rejected() {
        let mut config = AidevConfig::default();
        config.output.dir = String::new();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "output.dir"));
    }
}
