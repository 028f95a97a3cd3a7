use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use super::error::ResolveError;
use super::json;
use super::traits::MediaResolver;
use crate::core::filename;
use crate::core::http::FetchContext;
use crate::m3u8::{select_best_audio, select_best_video, Playlist};
use crate::models::media::{Media, MediaKind, MediaTrack};

// The embed page inlines its config as a script assignment; there is no
// HTML/JS parsing here, only these literal markers. When Vimeo changes
// the markup the scan fails loudly with MarkerNotFound.
const PLAYER_CONFIG_PREFIX: &str = "window.playerConfig = ";
const PLAYER_CONFIG_TERMINATOR: &str = "}; ";

pub struct VimeoResolver;

impl Default for VimeoResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl VimeoResolver {
    pub fn new() -> Self {
        Self
    }

    fn extract_player_config(html: &str) -> Result<&str, ResolveError> {
        let start = html
            .find(PLAYER_CONFIG_PREFIX)
            .ok_or(ResolveError::MarkerNotFound)?
            + PLAYER_CONFIG_PREFIX.len();
        let rest = &html[start..];

        let end = rest
            .find(PLAYER_CONFIG_TERMINATOR)
            .ok_or(ResolveError::MarkerNotFound)?;

        Ok(&rest[..end + 1])
    }

    /// Widest progressive-download entry, strict comparison so equal
    /// widths keep the first one. `None` when the list is absent or
    /// yields no candidate.
    fn best_progressive(config: &Value) -> Result<Option<String>, ResolveError> {
        let files = json::object(json::object(config, "request")?, "files")?;

        let Some(progressive) = files.get("progressive") else {
            return Ok(None);
        };
        let progressive = progressive
            .as_array()
            .ok_or(ResolveError::NonMatchingType("progressive"))?;

        let mut best_width = 0i64;
        let mut best_url: Option<&str> = None;

        for entry in progressive {
            if !entry.is_object() {
                return Err(ResolveError::NonMatchingType("progressive"));
            }

            let width = json::integer(entry, "width")?;

            if best_width < width {
                best_url = Some(json::string(entry, "url")?);
                best_width = width;
            }
        }

        Ok(best_url.map(str::to_string))
    }

    fn hls_playlist_url(config: &Value) -> Result<Option<String>, ResolveError> {
        let files = json::object(json::object(config, "request")?, "files")?;

        let Some(hls) = files.get("hls") else {
            return Ok(None);
        };
        if !hls.is_object() {
            return Err(ResolveError::NonMatchingType("hls"));
        }

        let default_cdn = json::string(hls, "default_cdn")?;
        let cdn = json::object(hls, "cdns")?
            .get(default_cdn)
            .ok_or(ResolveError::MissingRequiredKey("cdns.default_cdn"))?;

        Ok(Some(json::string(cdn, "url")?.to_string()))
    }
}

#[async_trait]
impl MediaResolver for VimeoResolver {
    fn name(&self) -> &'static str {
        "vimeo"
    }

    fn can_handle(&self, url: &str) -> bool {
        match Url::parse(url) {
            Ok(parsed) => {
                parsed.host_str() == Some("player.vimeo.com")
                    && parsed.path().starts_with("/video/")
            }
            Err(_) => false,
        }
    }

    async fn resolve(&self, url: &str, ctx: &FetchContext) -> Result<Media, ResolveError> {
        let html = ctx.get_text(url).await?;
        let raw = Self::extract_player_config(&html)?;
        let config: Value = serde_json::from_str(raw).map_err(|_| ResolveError::CannotParse)?;

        let video = json::object(&config, "video")?;
        let title = json::string(video, "title")?.to_string();
        let id = json::integer(video, "id")?.to_string();

        if let Some(stream_url) = Self::best_progressive(&config)? {
            let extension =
                filename::extension_of(&stream_url).unwrap_or_else(|| "mp4".to_string());
            tracing::debug!(id = %id, "vimeo progressive stream selected");

            return Ok(Media {
                kind: MediaKind::Single,
                video: MediaTrack::new(id, &title, &extension, stream_url),
                audio: None,
            });
        }

        let playlist_url = Self::hls_playlist_url(&config)?
            .ok_or(ResolveError::NoStreamsAvailable)?;

        let text = ctx.get_text(&playlist_url).await?;
        let playlist = Playlist::parse(&text)?;
        let base = Url::parse(&playlist_url)?;

        let video_url = select_best_video(&playlist, &base)?;
        let audio_url =
            select_best_audio(&playlist, &base)?.ok_or(ResolveError::NoStreamsAvailable)?;
        tracing::debug!(id = %id, "vimeo hls streams selected");

        Ok(Media {
            kind: MediaKind::HlsDerived,
            video: MediaTrack::new(id.clone(), &title, "mp4", video_url),
            audio: Some(MediaTrack::new(id, &title, "aac", audio_url)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn embed_page(config: &str) -> String {
        format!(
            "<html><script>window.playerConfig = {}; if (!window.global) {{}}</script></html>",
            config
        )
    }

    #[test]
    fn extracts_inline_player_config() {
        let html = embed_page(r#"{"video":{"id":1}}"#);
        let raw = VimeoResolver::extract_player_config(&html).unwrap();
        assert_eq!(raw, r#"{"video":{"id":1}}"#);
        assert!(serde_json::from_str::<Value>(raw).is_ok());
    }

    #[test]
    fn missing_prefix_marker_fails() {
        assert!(matches!(
            VimeoResolver::extract_player_config("<html></html>"),
            Err(ResolveError::MarkerNotFound)
        ));
    }

    #[test]
    fn missing_terminator_marker_fails() {
        assert!(matches!(
            VimeoResolver::extract_player_config("window.playerConfig = {\"a\":1}"),
            Err(ResolveError::MarkerNotFound)
        ));
    }

    #[test]
    fn progressive_picks_widest() {
        let config = json!({"request": {"files": {"progressive": [
            {"width": 640, "url": "https://v/360.mp4"},
            {"width": 1920, "url": "https://v/1080.mp4"},
            {"width": 1280, "url": "https://v/720.mp4"}
        ]}}});
        assert_eq!(
            VimeoResolver::best_progressive(&config).unwrap().as_deref(),
            Some("https://v/1080.mp4")
        );
    }

    #[test]
    fn progressive_tie_keeps_first() {
        let config = json!({"request": {"files": {"progressive": [
            {"width": 1280, "url": "https://v/a.mp4"},
            {"width": 1280, "url": "https://v/b.mp4"}
        ]}}});
        assert_eq!(
            VimeoResolver::best_progressive(&config).unwrap().as_deref(),
            Some("https://v/a.mp4")
        );
    }

    #[test]
    fn empty_progressive_yields_none() {
        let config = json!({"request": {"files": {"progressive": []}}});
        assert_eq!(VimeoResolver::best_progressive(&config).unwrap(), None);
    }

    #[test]
    fn progressive_entry_without_width_fails() {
        let config = json!({"request": {"files": {"progressive": [{"url": "https://v/a.mp4"}]}}});
        assert!(matches!(
            VimeoResolver::best_progressive(&config),
            Err(ResolveError::MissingRequiredKey("width"))
        ));
    }

    #[test]
    fn hls_url_follows_default_cdn() {
        let config = json!({"request": {"files": {"hls": {
            "default_cdn": "akfire_interconnect_quic",
            "cdns": {
                "akfire_interconnect_quic": {"url": "https://cdn-a/master.m3u8"},
                "fastly_skyfire": {"url": "https://cdn-b/master.m3u8"}
            }
        }}}});
        assert_eq!(
            VimeoResolver::hls_playlist_url(&config).unwrap().as_deref(),
            Some("https://cdn-a/master.m3u8")
        );
    }

    #[test]
    fn hls_unknown_default_cdn_fails() {
        let config = json!({"request": {"files": {"hls": {
            "default_cdn": "missing",
            "cdns": {}
        }}}});
        assert!(matches!(
            VimeoResolver::hls_playlist_url(&config),
            Err(ResolveError::MissingRequiredKey("cdns.default_cdn"))
        ));
    }

    #[test]
    fn handles_only_player_embed_urls() {
        let resolver = VimeoResolver::new();
        assert!(resolver.can_handle("https://player.vimeo.com/video/123456?h=abc"));
        assert!(!resolver.can_handle("https://vimeo.com/123456"));
        assert!(!resolver.can_handle("not a url"));
    }
}
