/// Extract the bare `type/subtype` token from a media type string.
///
/// Leading whitespace is skipped, then the longest run of characters that are
/// neither `;` nor whitespace is returned. Parameters and trailing junk are
/// dropped. Case is left alone; callers lowercase before lookups.
///
/// A byte-order mark counts as whitespace.
pub fn essence(input: &str) -> &str {
    let rest = input.trim_start_matches(is_space);
    let end = rest
        .find(|c: char| c == ';' || is_space(c))
        .unwrap_or(rest.len());
    &rest[..end]
}

fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Lowercased [`essence`], ready for map lookups.
pub fn lookup_key(input: &str) -> String {
    essence(input).to_lowercase()
}

/// True when the token's primary type is `text`, ignoring case.
pub fn is_text(token: &str) -> bool {
    token
        .split_once('/')
        .is_some_and(|(primary, _)| primary.eq_ignore_ascii_case("text"))
}
