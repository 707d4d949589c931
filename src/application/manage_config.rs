//! Config management use case

use crate::error::{EncycloError, Result};
use crate::infrastructure::{Config, FileSystemStore, WikiRepository};

/// Service for managing wiki configuration
pub struct ConfigService {
    repository: FileSystemStore,
}

impl ConfigService {
    pub fn new(repository: FileSystemStore) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "editor" => Ok(config.editor),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(EncycloError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: editor, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "editor" => {
                config.editor = value.to_string();
            }
            "created" => {
                return Err(EncycloError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(EncycloError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: editor",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
