//! A single note being converted

use std::path::{Path, PathBuf};

/// The text of one note together with the path it was read from.
///
/// `source_path` never changes; `text` is rewritten stage by stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    source_path: PathBuf,
    pub text: String,
}

impl Document {
    pub fn new(source_path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Document {
            source_path: source_path.into(),
            text: text.into(),
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// File name of the source path, or an empty string when it has none
    pub fn file_name(&self) -> &str {
        self.source_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
    }

    pub fn into_text(self) -> String {
        self.text
    }
}
