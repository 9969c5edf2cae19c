//! Bullet nesting to heading conversion

use regex::Regex;
use std::sync::OnceLock;

/// Deepest indentation level converted; deeper bullets are left as they are
pub const MAX_BULLET_NESTING: usize = 20;

const SPACES_PER_LEVEL: usize = 4;

const HEADING_MARKER: char = '*';

/// Patterns indexed by level: `level * 4` spaces then `- ` at line start
fn bullet_regexes() -> &'static [Regex] {
    static REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        (0..=MAX_BULLET_NESTING)
            .map(|level| {
                Regex::new(&format!(r"(?m)^ {{{}}}- ", level * SPACES_PER_LEVEL)).unwrap()
            })
            .collect()
    })
}

/// `level + 1` heading markers followed by a space
pub fn heading_prefix(level: usize) -> String {
    let mut prefix: String = std::iter::repeat(HEADING_MARKER).take(level + 1).collect();
    prefix.push(' ');
    prefix
}

/// Turn indented `- ` bullets into `*` headings, deepest level first.
pub fn format_bullets(text: &str) -> String {
    let mut rewritten = text.to_string();

    for level in (0..=MAX_BULLET_NESTING).rev() {
        let prefix = heading_prefix(level);
        rewritten = bullet_regexes()[level]
            .replace_all(&rewritten, prefix.as_str())
            .into_owned();
    }

    rewritten.replace("  **", "**")
}
