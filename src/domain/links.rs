//! Cross-note link rewriting
//!
//! The source dialect writes a link to another note as `[[Name]]`. The target
//! dialect wants a typed file link, `[[file:Name.org][Name]]`, where the first
//! part is the file on disk and the second part is what the reader sees.

use regex::Regex;
use std::sync::OnceLock;

/// Marker opening a fully-qualified file link
pub const FILE_LINK_PREFIX: &str = "[[file:";

/// Extension of converted notes
pub const TARGET_EXTENSION: &str = ".org";

/// Number of trailing characters dropped from a link target to get its name
const EXTENSION_LEN: usize = 4;

/// Bare `[[...]]` links whose label only uses characters we know are safe
fn bare_link_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[\[([a-zA-Z0-9 !&,.()?':-]+)\]\]").unwrap())
}

fn file_link_target_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\[\[file:([^\]]*)").unwrap())
}

/// Build `[[file:<target>][<label>]]`
pub fn file_link(target: &str, label: &str) -> String {
    format!("{}{}][{}]]", FILE_LINK_PREFIX, target, label)
}

/// Build the link a note named `name` gets after normalization
pub fn named_file_link(name: &str) -> String {
    file_link(&format!("{}{}", name, TARGET_EXTENSION), name)
}

/// Rewrite bare `[[Name]]` links into `[[file:Name.org][Name]]`.
///
/// Links with characters outside the allowed label set, and links that
/// already start with `file:`, are left alone.
pub fn normalize_links(text: &str) -> String {
    bare_link_regex()
        .replace_all(text, |captures: &regex::Captures<'_>| {
            let label = &captures[1];
            if label.starts_with("file:") {
                captures[0].to_string()
            } else {
                named_file_link(label)
            }
        })
        .to_string()
}

/// Names of every file link in the text, in order of appearance.
///
/// Duplicates are kept. The name is the link target with its four-character
/// extension removed; targets too short to carry one are ignored.
pub fn extract_link_names(text: &str) -> Vec<String> {
    file_link_target_regex()
        .captures_iter(text)
        .filter_map(|cap| strip_extension(&cap[1]))
        .collect()
}

fn strip_extension(target: &str) -> Option<String> {
    let char_count = target.chars().count();
    if char_count < EXTENSION_LEN {
        return None;
    }
    Some(target.chars().take(char_count - EXTENSION_LEN).collect())
}

/// Point links at the underscored file name while keeping the readable label.
///
/// Only links whose target and label both still equal the original name are
/// touched, so date links already turned into timestamps are skipped.
pub fn underscore_linked_file_names(text: &str, names: &[String]) -> String {
    let mut rewritten = text.to_string();

    for name in names {
        if !name.contains(' ') {
            continue;
        }

        let underscored = name.replace(' ', "_");
        let original = named_file_link(name);
        let replacement = file_link(&format!("{}{}", underscored, TARGET_EXTENSION), name);
        rewritten = rewritten.replace(&original, &replacement);
    }

    rewritten
}
