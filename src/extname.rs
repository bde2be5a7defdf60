//! Extension extraction from file paths.

/// Signature of a pluggable extension extractor.
///
/// Given a path, return the extension without its leading dot, or `None`
/// when the path has none.
pub type ExtNameFn = fn(&str) -> Option<&str>;

/// Return the extension of the last path segment, without the dot.
///
/// Both `/` and `\` separate segments. A dot only introduces an extension
/// when it is not the first character of the segment, so `.json` has no
/// extension while `.config.json` has `json`. A trailing dot yields an empty
/// extension.
pub fn extension(path: &str) -> Option<&str> {
    let segment_start = path
        .rfind(['/', '\\'])
        .map_or(0, |i| i + 1);
    let segment = &path[segment_start..];

    match segment.rfind('.') {
        Some(dot) if dot > 0 => Some(&segment[dot + 1..]),
        _ => None,
    }
}

/// Extract the lookup key for a path or bare extension.
///
/// The input is treated as a file name by prefixing a dummy stem, so
/// `html`, `.html` and `page.html` all yield `html`. The result is
/// lowercased; an empty or missing extension gives `None`.
pub fn lookup_key(input: &str, extname: ExtNameFn) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    let prefixed = format!("x.{input}");
    match extname(&prefixed) {
        Some(ext) if !ext.is_empty() => Some(ext.to_lowercase()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_plain() {
        assert_eq!(extension("page.html"), Some("html"));
        assert_eq!(extension("archive.tar.gz"), Some("gz"));
    }

    #[test]
    fn test_extension_paths() {
        assert_eq!(extension("/path/to/page.html"), Some("html"));
        assert_eq!(extension("path\\to\\page.html"), Some("html"));
        assert_eq!(extension("C:\\path\\to\\page.html"), Some("html"));
        assert_eq!(extension("C:/path/to/file.bmp"), Some("bmp"));
    }

    #[test]
    fn test_extension_dot_only_in_directory() {
        assert_eq!(extension("/some.dir/README"), None);
        assert_eq!(extension("/path/to/json"), None);
    }

    #[test]
    fn test_extension_dotfiles() {
        assert_eq!(extension(".json"), None);
        assert_eq!(extension("/path/to/.json"), None);
        assert_eq!(extension(".config.json"), Some("json"));
        assert_eq!(extension("/path/to/.config.json"), Some("json"));
    }

    #[test]
    fn test_extension_trailing_dot() {
        assert_eq!(extension("file."), Some(""));
        assert_eq!(extension("/"), None);
        assert_eq!(extension(""), None);
    }

    #[test]
    fn test_lookup_key_bare_and_dotted() {
        assert_eq!(lookup_key("html", extension).as_deref(), Some("html"));
        assert_eq!(lookup_key(".html", extension).as_deref(), Some("html"));
        assert_eq!(lookup_key("HTML", extension).as_deref(), Some("html"));
        assert_eq!(lookup_key(".config.json", extension).as_deref(), Some("json"));
    }

    #[test]
    fn test_lookup_key_missing() {
        assert_eq!(lookup_key("", extension), None);
        assert_eq!(lookup_key("/path/to/json", extension), None);
        assert_eq!(lookup_key("/path/to/.json", extension), None);
        assert_eq!(lookup_key("file.", extension), None);
    }

    #[test]
    fn test_lookup_key_custom_extractor() {
        fn whole_suffix(path: &str) -> Option<&str> {
            path.split_once('.').map(|(_, rest)| rest)
        }
        assert_eq!(lookup_key("tar.gz", whole_suffix).as_deref(), Some("tar.gz"));
    }
}
