//! # canvass-config
//!
//! Layered configuration loading for Canvass using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CANVASS_*` prefix, `__` as separator)
//! 2. Project-level `.canvass/config.toml`
//! 3. User-level `~/.config/canvass/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `CANVASS_STORAGE__DB_PATH` -> `storage.db_path`, etc. The
//! `__` (double underscore) separates nested config sections.

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CanvassConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CanvassConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support. The typical entry point
    /// for the CLI.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".canvass/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("CANVASS_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("canvass").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = CanvassConfig::default();
        assert!(config.storage.db_path.is_empty());
        assert_eq!(config.general.default_limit, 20);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: CanvassConfig = CanvassConfig::figment().extract()?;
            assert!(config.storage.db_path.is_empty());
            assert_eq!(config.general.default_limit, 20);
            Ok(())
        });
    }

    #[test]
    fn env_vars_override_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("CANVASS_STORAGE__DB_PATH", "/tmp/jail.db");
            jail.set_env("CANVASS_GENERAL__DEFAULT_LIMIT", "5");
            let config: CanvassConfig = CanvassConfig::figment().extract()?;
            assert_eq!(config.storage.db_path, "/tmp/jail.db");
            assert_eq!(config.general.default_limit, 5);
            Ok(())
        });
    }

    #[test]
    fn local_toml_layers_under_env() {
        figment::Jail::expect_with(|jail| {
            jail.create_dir(".canvass")?;
            jail.create_file(
                ".canvass/config.toml",
                r#"
                [storage]
                db_path = "/tmp/from-toml.db"

                [general]
                default_limit = 7
                "#,
            )?;
            jail.set_env("CANVASS_GENERAL__DEFAULT_LIMIT", "9");
            let config: CanvassConfig = CanvassConfig::figment().extract()?;
            assert_eq!(config.storage.db_path, "/tmp/from-toml.db");
            assert_eq!(config.general.default_limit, 9);
            Ok(())
        });
    }
}
