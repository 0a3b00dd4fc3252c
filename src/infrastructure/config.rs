//! Configuration management

use crate::error::{Result, SnipStashError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub user: String,
    pub created: DateTime<Utc>,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            user: Self::detect_default_user(),
            created: Utc::now(),
        }
    }

    /// Load config from .snipstash/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".snipstash").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SnipStashError::NotStashDirectory(path.to_path_buf())
            } else {
                SnipStashError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| SnipStashError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .snipstash/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let stash_dir = path.join(".snipstash");
        let config_path = stash_dir.join("config.toml");

        // Ensure .snipstash directory exists
        if !stash_dir.exists() {
            fs::create_dir(&stash_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| SnipStashError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the acting user identity, checking the environment first
    pub fn get_user(&self) -> String {
        std::env::var("SNIPSTASH_USER").unwrap_or_else(|_| self.user.clone())
    }

    /// Detect default user identity from environment or system
    fn detect_default_user() -> String {
        std::env::var("SNIPSTASH_USER")
            .or_else(|_| std::env::var("USER"))
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_else(|_| "default".to_string())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
