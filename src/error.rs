//! Error types for roam2org

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for roam2org
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename {from} to {to}: {source}")]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("Directory listing error: {0}")]
    Listing(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl ConvertError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::NotADirectory(_) => 2,
            ConvertError::DestinationExists(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ConvertError::NotADirectory(path) => {
                format!(
                    "Not a directory: {}\n\n\
                    Suggestions:\n\
                    • Pass the folder that holds your exported .md files with -d\n\
                    • Unzip the export archive first if you have not done so",
                    path.display()
                )
            }
            ConvertError::DestinationExists(path) => {
                format!(
                    "Destination already exists: {}\n\n\
                    Suggestions:\n\
                    • Two notes map to the same file name once spaces become underscores\n\
                    • Remove or rename one of them and run again\n\
                    • Use --on-error continue to convert the remaining notes anyway",
                    path.display()
                )
            }
            ConvertError::Read { path, .. } | ConvertError::Write { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check the permissions of {}\n\
                    • Notes must be UTF-8 text files",
                    self,
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ConvertError
pub type Result<T> = std::result::Result<T, ConvertError>;
