//! Configuration management

use crate::error::{ConvertError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// What to do when reading, writing or renaming a note fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the whole run at the first failure
    #[default]
    Abort,
    /// Record the failure and move on to the next note
    Continue,
}

impl FromStr for ErrorPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(ErrorPolicy::Abort),
            "continue" => Ok(ErrorPolicy::Continue),
            _ => Err(format!(
                "Invalid error policy: {}. Expected 'abort' or 'continue'",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub on_error: ErrorPolicy,
    /// Entries whose name ends with one of these are not notes
    pub skip_suffixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            on_error: ErrorPolicy::Abort,
            skip_suffixes: vec![".db".to_string()],
        }
    }
}

impl Config {
    /// Load config from a TOML file; missing keys take their defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ConvertError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Whether a directory entry with this name should be left alone
    pub fn is_skipped(&self, file_name: &str) -> bool {
        self.skip_suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }
}
