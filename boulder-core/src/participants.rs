//! Participant input coming from forms and command lines.

/// Split comma-separated input into names, trimming whitespace and
/// dropping empty entries.
pub fn parse_participant_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trimmed participant name, or None if nothing is left.
pub fn normalize_name(input: &str) -> Option<&str> {
    let name = input.trim();
    if name.is_empty() { None } else { Some(name) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_comma_separated_names() {
        assert_eq!(parse_participant_list("Alice, Bob ,Carol"), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn empty_input_yields_no_participants() {
        assert!(parse_participant_list("").is_empty());
        assert!(parse_participant_list(" , ,").is_empty());
    }

    #[test]
    fn normalize_rejects_blank_names() {
        assert_eq!(normalize_name("  Dana "), Some("Dana"));
        assert_eq!(normalize_name("   "), None);
    }
}
