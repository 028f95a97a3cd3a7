use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static WS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));

/// Normalizes a provider-supplied title into a safe filename component:
/// NFC normalization, removal of filesystem-reserved characters, and
/// whitespace collapsing.
pub fn normalize(name: &str) -> String {
    let name: String = name.nfc().collect();
    let name = sanitize_filename::sanitize(name.trim());
    let name = WS_RE.replace_all(&name, " ");
    let name = name.trim_end_matches([' ', '-', '.', ';']);

    name.trim().to_string()
}

/// `normalize(title)` plus a dot and extension.
pub fn with_extension(title: &str, extension: &str) -> String {
    format!("{}.{}", normalize(title), extension)
}

/// Lowercased file extension of a URL path, ignoring query and fragment.
pub fn extension_of(url: &str) -> Option<String> {
    let path = match url::Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => url.split(['?', '#']).next().unwrap_or(url).to_string(),
    };

    let name = path.rsplit('/').next()?;
    let (stem, extension) = name.rsplit_once('.')?;

    if stem.is_empty() || extension.is_empty() {
        return None;
    }

    Some(extension.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_replaces_reserved_chars() {
        let result = normalize("Aula 01: Revisão?");
        assert!(!result.contains(':'));
        assert!(!result.contains('?'));
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("hello   world"), "hello world");
    }

    #[test]
    fn normalize_trims_trailing_punctuation() {
        assert_eq!(normalize("file name - "), "file name");
    }

    #[test]
    fn normalize_applies_nfc() {
        let decomposed = "e\u{0301}";
        assert_eq!(normalize(decomposed), "\u{00e9}");
    }

    #[test]
    fn extension_from_url_path() {
        assert_eq!(
            extension_of("https://cdn.example.com/v/clip.MP4?token=1"),
            Some("mp4".into())
        );
    }

    #[test]
    fn extension_missing_is_none() {
        assert_eq!(extension_of("https://cdn.example.com/v/clip"), None);
        assert_eq!(extension_of("https://cdn.example.com/"), None);
    }

    #[test]
    fn with_extension_joins() {
        assert_eq!(with_extension("Aula 1", "mp4"), "Aula 1.mp4");
    }
}
