//! Wiki configuration stored in `.encyclo/config.toml`

use crate::error::{EncycloError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = ".encyclo";
const CONFIG_FILE: &str = "config.toml";
const EDITOR_VARS: [&str; 2] = ["EDITOR", "VISUAL"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Command used to edit entry bodies, arguments allowed
    pub editor: String,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_DIR).join(CONFIG_FILE)
}

fn editor_from_env() -> Option<String> {
    EDITOR_VARS
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .filter(|editor| !editor.trim().is_empty())
}

impl Config {
    pub fn new() -> Self {
        Config {
            editor: Self::detect_default_editor(),
            created: Utc::now(),
        }
    }

    /// Read the config of the wiki rooted at `root`.
    ///
    /// A missing file means `root` is not a wiki; any other failure is a
    /// configuration problem.
    pub fn load_from_dir(root: &Path) -> Result<Self> {
        let path = config_path(root);

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(EncycloError::NotWikiDirectory(root.to_path_buf()))
            }
            Err(e) => {
                return Err(EncycloError::Config(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        toml::from_str(&contents)
            .map_err(|e| EncycloError::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))
    }

    pub fn save_to_dir(&self, root: &Path) -> Result<()> {
        let path = config_path(root);
        let write_failed = |e: std::io::Error| {
            EncycloError::Config(format!("Failed to write {}: {}", path.display(), e))
        };

        fs::create_dir_all(root.join(CONFIG_DIR)).map_err(write_failed)?;
        let contents = toml::to_string_pretty(self)
            .map_err(|e| EncycloError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents).map_err(write_failed)
    }

    /// Editor to launch: environment first, then the configured command
    pub fn get_editor(&self) -> String {
        editor_from_env().unwrap_or_else(|| self.editor.clone())
    }

    fn detect_default_editor() -> String {
        editor_from_env().unwrap_or_else(|| {
            if cfg!(windows) {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
    }
}
