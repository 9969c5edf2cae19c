//! Leftover source-dialect heading decoration

/// Decorative prefixes, longest first so no stray marker is left behind
const ROAM_HEADING_PREFIXES: [&str; 2] = ["### ", "## "];

/// Remove `### ` and `## ` wherever they occur
pub fn remove_roam_styling(text: &str) -> String {
    ROAM_HEADING_PREFIXES
        .iter()
        .fold(text.to_string(), |acc, prefix| acc.replace(prefix, ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_heading_prefixes() {
        assert_eq!(
            remove_roam_styling("* ### Big\n** ## Medium\n*** Small"),
            "* Big\n** Medium\n*** Small"
        );
    }

    #[test]
    fn test_second_pass_changes_nothing() {
        let once = remove_roam_styling("* ### Agenda\n** ## Notes\n- plain #tag");
        assert_eq!(remove_roam_styling(&once), once);
    }

    #[test]
    fn test_keeps_title_and_tags() {
        let input = "#+TITLE: Note\n#tag and ##double";
        assert_eq!(remove_roam_styling(input), input);
    }
}
