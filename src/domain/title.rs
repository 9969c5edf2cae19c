//! Title line handling

/// Marker that starts a title line in the target dialect
pub const TITLE_PREFIX: &str = "#+TITLE:";

/// Whether the text already carries a title marker anywhere
pub fn has_title(text: &str) -> bool {
    text.contains(TITLE_PREFIX)
}

/// Prepend `#+TITLE: <title>` unless the text already has a title marker.
pub fn ensure_title(text: &str, title: &str) -> String {
    if has_title(text) {
        return text.to_string();
    }

    format!("{} {}\n{}", TITLE_PREFIX, title, text)
}
