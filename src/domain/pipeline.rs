//! The ordered rewrite pipeline for one note
//!
//! Stage order matters:
//! - links are normalized before names are extracted, so extraction only sees
//!   the `[[file:...][...]]` form;
//! - names are captured once, before any later stage changes the text;
//! - dates are rewritten before file names are underscored, because both match
//!   on the link as it was first built;
//! - task timestamps are relocated before bullets become headings.

use crate::domain::bullets::format_bullets;
use crate::domain::dates::format_dates;
use crate::domain::links::{extract_link_names, normalize_links, underscore_linked_file_names};
use crate::domain::naming::title_from_file_name;
use crate::domain::styling::remove_roam_styling;
use crate::domain::tags::convert_hashtags_to_links;
use crate::domain::tasks::fix_task_keywords;
use crate::domain::title::ensure_title;
use crate::domain::Document;

/// Output of running the pipeline over one note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Rewritten note text
    pub text: String,
    /// Link names found after normalization, in order, duplicates kept
    pub link_names: Vec<String>,
}

/// Run every stage over `text`, using `title` if the note has no title line.
pub fn convert_text(text: &str, title: &str) -> Conversion {
    let text = ensure_title(text, title);
    let text = normalize_links(&text);
    let link_names = extract_link_names(&text);
    let text = format_dates(&text, &link_names);
    let text = fix_task_keywords(&text);
    let text = format_bullets(&text);
    let text = remove_roam_styling(&text);
    let text = underscore_linked_file_names(&text, &link_names);
    let text = convert_hashtags_to_links(&text);

    Conversion { text, link_names }
}

/// Convert a document in place, titling it after its file name.
///
/// Returns the link names discovered along the way.
pub fn convert_document(document: &mut Document) -> Vec<String> {
    let title = title_from_file_name(document.file_name());
    let conversion = convert_text(&document.text, &title);
    document.text = conversion.text;
    conversion.link_names
}
