//! Error types for snipstash

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the snipstash application
#[derive(Debug, Error)]
pub enum SnipStashError {
    #[error("Not a snipstash directory: {0}")]
    NotStashDirectory(PathBuf),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Snippet not found: {0}")]
    SnippetNotFound(String),

    #[error("Folder not found: {0}")]
    FolderNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl SnipStashError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SnipStashError::NotStashDirectory(_) => 2,
            SnipStashError::InvalidRequest(_) => 3,
            SnipStashError::SnippetNotFound(_) | SnipStashError::FolderNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SnipStashError::NotStashDirectory(path) => {
                format!(
                    "Not a snipstash directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'snipstash init' in this directory to create a new stash\n\
                    • Navigate to an existing snipstash directory\n\
                    • Set SNIPSTASH_ROOT environment variable to your stash path",
                    path.display()
                )
            }
            SnipStashError::SnippetNotFound(id) => {
                format!(
                    "Snippet not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'snipstash list' to see your snippets and their ids\n\
                    • Check that the id was copied completely\n\
                    • Snippets belonging to other users are not visible to you",
                    id
                )
            }
            SnipStashError::FolderNotFound(id) => {
                format!(
                    "Folder not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'snipstash folder ls' to see your folders and their ids\n\
                    • Check that the id was copied completely",
                    id
                )
            }
            SnipStashError::InvalidRequest(msg) => {
                if msg.contains("sort") {
                    format!(
                        "Invalid request: {}\n\n\
                        Valid sort fields: created, updated, title, language, usage, last-used\n\
                        Valid sort orders: asc, desc",
                        msg
                    )
                } else if msg.contains("language") {
                    format!(
                        "Invalid request: {}\n\n\
                        Use one of the supported language names, e.g.\n\
                        snipstash add --title 'Retry loop' --language python",
                        msg
                    )
                } else {
                    format!("Invalid request: {}", msg)
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SnipStashError
pub type Result<T> = std::result::Result<T, SnipStashError>;
