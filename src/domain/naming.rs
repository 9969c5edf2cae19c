//! File naming rules for converted notes

use crate::domain::links::TARGET_EXTENSION;
use std::path::Path;

/// Extension of notes in the source export
pub const SOURCE_EXTENSION: &str = ".md";

/// Title for a note that has none: the file name without its extension
pub fn title_from_file_name(file_name: &str) -> String {
    if let Some(stem) = file_name.strip_suffix(SOURCE_EXTENSION) {
        return stem.to_string();
    }

    Path::new(file_name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(file_name)
        .to_string()
}

/// Name a converted note is saved under: `.md` becomes `.org`, spaces become `_`
pub fn target_file_name(file_name: &str) -> String {
    let renamed = match file_name.strip_suffix(SOURCE_EXTENSION) {
        Some(stem) => format!("{}{}", stem, TARGET_EXTENSION),
        None => file_name.to_string(),
    };

    renamed.replace(' ', "_")
}
