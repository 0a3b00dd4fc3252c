//! Config management use case

use crate::error::{Result, SnipStashError};
use crate::infrastructure::{Config, FileSystemStore};

/// Service for managing stash configuration
pub struct ConfigService {
    store: FileSystemStore,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(store: FileSystemStore) -> Self {
        ConfigService { store }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.store.load_config()?;

        match key {
            "user" => Ok(config.user.clone()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(SnipStashError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: user, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.store.load_config()?;

        match key {
            "user" => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(SnipStashError::Config(
                        "Config key 'user' must not be empty".to_string(),
                    ));
                }
                config.user = trimmed.to_string();
            }
            "created" => {
                return Err(SnipStashError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(SnipStashError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: user",
                    key
                )));
            }
        }

        self.store.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.store.load_config()
    }
}
