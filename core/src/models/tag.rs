/// Split a comma-separated tag input into tags.
///
/// Each tag is trimmed and empty entries are dropped. Order and duplicates
/// are kept as entered.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tags back into the comma-separated form used for editing
pub fn format_tags(tags: &[String]) -> String {
    tags.join(", ")
}
