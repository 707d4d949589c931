//! Error types for encyclo

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for encyclo
#[derive(Debug, Error)]
pub enum EncycloError {
    #[error("Not an encyclo directory: {0}")]
    NotWikiDirectory(PathBuf),

    #[error("Invalid title: entry titles must not be empty")]
    InvalidTitle,

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] std::io::Error),

    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    #[error("Entry already exists: {0}")]
    EntryExists(String),

    #[error("The wiki has no entries")]
    EmptyStore,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Editor error: {0}")]
    Editor(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl EncycloError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            EncycloError::NotWikiDirectory(_) => 2,
            EncycloError::InvalidTitle => 3,
            EncycloError::EntryNotFound(_) | EncycloError::EmptyStore => 4,
            EncycloError::StorageUnavailable(_) => 5,
            EncycloError::EntryExists(_) => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            EncycloError::NotWikiDirectory(path) => {
                format!(
                    "Not an encyclo directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'encyclo init' in this directory to create a new wiki\n\
                    • Navigate to an existing wiki directory\n\
                    • Set ENCYCLO_ROOT environment variable to your wiki path",
                    path.display()
                )
            }
            EncycloError::EntryNotFound(title) => {
                format!(
                    "The page you requested is not available: '{}'\n\n\
                    Suggestions:\n\
                    • Titles are case-sensitive\n\
                    • Use 'encyclo list' to see available entries\n\
                    • Use 'encyclo search <text>' to find titles containing some text\n\
                    • Create it: encyclo new '{}'",
                    title, title
                )
            }
            EncycloError::EntryExists(title) => {
                format!(
                    "This page is already present: '{}'\n\n\
                    Use 'encyclo edit {}' to change its content",
                    title, title
                )
            }
            EncycloError::EmptyStore => "The wiki has no entries yet\n\n\
                Create one first: encyclo new <title> --body <text>"
                .to_string(),
            EncycloError::Editor(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that your editor is installed and in PATH\n\
                    • Set EDITOR environment variable (e.g., export EDITOR=nano)\n\
                    • Configure editor: encyclo config editor 'vim'\n\
                    • Pass the content directly: encyclo edit <title> --body <text>",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using EncycloError
pub type Result<T> = std::result::Result<T, EncycloError>;
