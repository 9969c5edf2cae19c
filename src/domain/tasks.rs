//! Task keyword rewriting

use regex::Regex;
use std::sync::OnceLock;

/// Status keywords the source dialect renders as `{{[[KEYWORD]]}}` widgets
const STATUS_KEYWORDS: [&str; 2] = ["DONE", "TODO"];

/// A TODO line carrying an inline `<...>` timestamp.
///
/// Greedy groups: the last `TODO`, `<` and `>` on the line win.
fn scheduled_todo_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(.*)TODO(.*)<(.*)>(.*)").unwrap())
}

/// Rewrite task widgets and move TODO timestamps onto a `SCHEDULED:` line.
pub fn fix_task_keywords(text: &str) -> String {
    let mut rewritten = text.to_string();

    for keyword in STATUS_KEYWORDS {
        let widget = format!("{{{{[[file:{}.org][{}]]}}}}", keyword, keyword);
        rewritten = rewritten.replace(&widget, keyword);
    }

    // Single pass: one timestamp per line is relocated.
    let rewritten = scheduled_todo_regex().replace_all(
        &rewritten,
        "${1} TODO${2} ${4}\n${1} SCHEDULED: <${3}>",
    );

    rewritten.replace("-  SCHEDULED:", "   SCHEDULED:")
}
