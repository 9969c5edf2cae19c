//! Date link rewriting
//!
//! Daily notes in the source dialect are named like `January 2nd, 2024`. Links
//! to them become plain timestamps, `<2024-01-02 Tue>`.

use crate::domain::links::named_file_link;
use chrono::{Month, NaiveDate};

const DAY_SUFFIXES: [&str; 4] = ["st,", "nd,", "rd,", "th,"];

/// Layout of a daily note name once the ordinal suffix is gone
const NAME_DATE_FORMAT: &str = "%B %d %Y";

const TIMESTAMP_FORMAT: &str = "<%Y-%m-%d %a>";

/// Drop `st,`, `nd,`, `rd,` and `th,` wherever they appear
pub fn remove_day_suffixes(name: &str) -> String {
    DAY_SUFFIXES
        .iter()
        .fold(name.to_string(), |acc, suffix| acc.replace(suffix, ""))
}

/// Parse a link name such as `January 2nd, 2024` as a calendar date
pub fn parse_note_date(name: &str) -> Option<NaiveDate> {
    let candidate = remove_day_suffixes(name);
    if !has_full_month_and_year(&candidate) {
        return None;
    }
    NaiveDate::parse_from_str(&candidate, NAME_DATE_FORMAT).ok()
}

/// `%B` and `%Y` alone also accept `Feb` and two-digit years; daily note
/// names always spell the month out and carry a four-digit year.
fn has_full_month_and_year(candidate: &str) -> bool {
    let parts: Vec<&str> = candidate.split(' ').filter(|p| !p.is_empty()).collect();
    let [month, _day, year] = parts.as_slice() else {
        return false;
    };

    let full_month = (1..=12u8)
        .filter_map(|n| Month::try_from(n).ok())
        .any(|m| m.name().eq_ignore_ascii_case(month));

    full_month && year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit())
}

/// Render a date as a target-dialect timestamp
pub fn format_timestamp(date: NaiveDate) -> String {
    date.format(TIMESTAMP_FORMAT).to_string()
}

/// Replace links to daily notes with timestamps.
///
/// Names that are not dates are skipped.
pub fn format_dates(text: &str, names: &[String]) -> String {
    let mut rewritten = text.to_string();

    for name in names {
        let Some(date) = parse_note_date(name) else {
            continue;
        };

        let link = named_file_link(name);
        if rewritten.contains(&link) {
            log::debug!("Rewriting date link '{}' as {}", name, date);
            rewritten = rewritten.replace(&link, &format_timestamp(date));
        }
    }

    rewritten
}
