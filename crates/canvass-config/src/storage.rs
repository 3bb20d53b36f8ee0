//! Storage section: where the local database lives.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Path to the libSQL database file. Empty means the platform data dir
    /// (`~/.local/share/canvass/canvass.db` on Linux).
    #[serde(default)]
    pub db_path: String,
}

impl StorageConfig {
    /// Resolve the effective database path.
    #[must_use]
    pub fn resolve_db_path(&self) -> PathBuf {
        if self.db_path.is_empty() {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("canvass")
                .join("canvass.db")
        } else {
            PathBuf::from(&self.db_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = StorageConfig {
            db_path: "/tmp/custom.db".to_string(),
        };
        assert_eq!(config.resolve_db_path(), PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn empty_path_falls_back_to_data_dir() {
        let config = StorageConfig::default();
        let resolved = config.resolve_db_path();
        assert!(resolved.ends_with("canvass/canvass.db"));
    }
}
