//! Export configuration
//!
//! Loaded from an optional JSON file; every field has a default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    /// Value of the `author` meta tag
    #[serde(default = "default_author")]
    pub author: String,
    /// Document language, `<html lang>`
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_author() -> String { "AutoPagePro".to_string() }
fn default_lang() -> String { "en".to_string() }

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            author: default_author(),
            lang: default_lang(),
        }
    }
}

impl ExportConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: ExportConfig = serde_json::from_str(r#"{"author": "Acme"}"#).unwrap();
        assert_eq!(config.author, "Acme");
        assert_eq!(config.lang, "en");
    }

    #[test]
    fn test_load_missing_file() {
        let err = ExportConfig::load(Path::new("/nonexistent/landing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        fs::write(&path, r#"{"author": "Acme", "lang": "de"}"#).unwrap();

        let config = ExportConfig::load(&path).unwrap();
        assert_eq!(config.lang, "de");

        fs::write(&path, "{not json").unwrap();
        assert!(matches!(ExportConfig::load(&path), Err(ConfigError::Parse { .. })));
    }
}
