//! Application configuration management.
//!
//! This module handles loading and saving the application configuration,
//! which includes the credential allow-list, an optional data directory
//! override and the last identifier used at the login form.
//!
//! Configuration is stored at `~/.config/privytalk/config.json`. The
//! allow-list is deploy-time configuration; hashes for it are produced with
//! `privytalk --hash-secret`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::auth::{AllowList, CredentialRecord};

/// Application name used for config/data directory paths
const APP_NAME: &str = "privytalk";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub credentials: Vec<CredentialRecord>,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub last_identifier: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Where durable key-value data and logs live.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.data_dir {
            return Ok(dir.clone());
        }
        let data_dir = dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find data directory"))?;
        Ok(data_dir.join(APP_NAME))
    }

    pub fn allow_list(&self) -> Result<AllowList> {
        AllowList::new(self.credentials.clone()).context("Invalid credential allow-list")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.credentials.is_empty());
        assert!(config.last_identifier.is_none());
        assert!(config.allow_list().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            credentials: vec![CredentialRecord::new("Banku", "123456789", "Banku").unwrap()],
            data_dir: Some(dir.path().join("data")),
            last_identifier: Some("Banku".to_string()),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.credentials, config.credentials);
        assert_eq!(loaded.data_dir().unwrap(), dir.path().join("data"));
        assert_eq!(loaded.last_identifier.as_deref(), Some("Banku"));
        assert!(loaded.allow_list().unwrap().verify("Banku", "123456789").is_some());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "last_identifier": "Rachit_14" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.credentials.is_empty());
        assert!(config.data_dir.is_none());
        assert_eq!(config.last_identifier.as_deref(), Some("Rachit_14"));
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ credentials: ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
