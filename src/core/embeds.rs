//! Embedded-player discovery in scraped lesson HTML.
//!
//! Catalog scrapers hand over raw page HTML; this finds the first known
//! player iframe URL by literal marker, the same fragile-but-sufficient
//! scan the providers' markup has always tolerated.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedKind {
    Vimeo,
    YouTube,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedStream {
    pub kind: EmbedKind,
    pub url: String,
}

const MARKERS: [(&str, EmbedKind); 2] = [
    ("//player.vimeo.com/video", EmbedKind::Vimeo),
    ("//www.youtube.com/embed", EmbedKind::YouTube),
];

/// Scans HTML for a known embed URL. The URL extends from the marker to
/// the closing double quote and gets an `https:` scheme prefixed.
/// Returns `None` when no player is embedded on the page.
pub fn find_embed(html: &str) -> Option<EmbedStream> {
    for (marker, kind) in MARKERS {
        let Some(start) = html.find(marker) else {
            continue;
        };

        let rest = &html[start..];
        let end = rest.find('"')?;

        return Some(EmbedStream {
            kind,
            url: format!("https:{}", &rest[..end]),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_vimeo_embed() {
        let html = r#"<iframe src="https://player.vimeo.com/video/123456?h=abc"></iframe>"#;
        let embed = find_embed(html).unwrap();
        assert_eq!(embed.kind, EmbedKind::Vimeo);
        assert_eq!(embed.url, "https://player.vimeo.com/video/123456?h=abc");
    }

    #[test]
    fn finds_youtube_embed() {
        let html = r#"<iframe src="//www.youtube.com/embed/dQw4w9WgXcQ"></iframe>"#;
        let embed = find_embed(html).unwrap();
        assert_eq!(embed.kind, EmbedKind::YouTube);
        assert_eq!(embed.url, "https://www.youtube.com/embed/dQw4w9WgXcQ");
    }

    #[test]
    fn vimeo_wins_when_both_present() {
        let html = r#"a "//player.vimeo.com/video/1" b "//www.youtube.com/embed/x""#;
        assert_eq!(find_embed(html).unwrap().kind, EmbedKind::Vimeo);
    }

    #[test]
    fn page_without_player_is_none() {
        assert_eq!(find_embed("<html><body>texto</body></html>"), None);
    }

    #[test]
    fn marker_without_closing_quote_is_none() {
        assert_eq!(find_embed("//player.vimeo.com/video/123"), None);
    }
}
