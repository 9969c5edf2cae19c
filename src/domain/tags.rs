//! Hashtag to link conversion

use crate::domain::links::FILE_LINK_PREFIX;
use regex::Regex;
use std::sync::OnceLock;

/// `#tag` preceded by whitespace; `#[` and `#+` are not tags
fn hashtag_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(\s)#([^\s\[+]\S*)").unwrap())
}

/// Turn `#tag` into `[[file:tag.org][tag]]` and drop `#` left in front of links.
pub fn convert_hashtags_to_links(text: &str) -> String {
    let rewritten = hashtag_regex().replace_all(text, "${1}[[file:${2}.org][${2}]]");

    rewritten.replace(&format!("#{}", FILE_LINK_PREFIX), FILE_LINK_PREFIX)
}
