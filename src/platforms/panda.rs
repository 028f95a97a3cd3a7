use async_trait::async_trait;
use url::Url;

use super::error::ResolveError;
use super::traits::MediaResolver;
use crate::core::http::FetchContext;
use crate::m3u8::{select_best_video, Playlist};
use crate::models::media::{Media, MediaKind, MediaTrack};

const HOST_PREFIX: &str = "player-vz-";
const HOST_SUFFIX: &str = ".tv.pandavideo.com.br";

const SUBDOMAIN_CODE_LEN: usize = 12;

pub struct PandaResolver;

impl Default for PandaResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PandaResolver {
    pub fn new() -> Self {
        Self
    }

    /// Derives the master playlist URL from an embed URL. The media
    /// code is the `v` query parameter and the playlist lives on the
    /// matching `b-` host.
    fn playlist_url(embed: &Url) -> Result<(String, String), ResolveError> {
        let code = embed
            .query_pairs()
            .find(|(key, _)| key == "v")
            .map(|(_, value)| value.into_owned())
            .filter(|code| !code.is_empty())
            .ok_or(ResolveError::MarkerNotFound)?;

        let host = embed.host_str().ok_or(ResolveError::MarkerNotFound)?;
        let rest = host
            .strip_prefix("player-")
            .ok_or(ResolveError::MarkerNotFound)?;

        let playlist = format!("https://b-{}/{}/playlist.m3u8", rest, code);

        Ok((code, playlist))
    }
}

#[async_trait]
impl MediaResolver for PandaResolver {
    fn name(&self) -> &'static str {
        "panda"
    }

    fn can_handle(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };

        parsed.scheme() == "https"
            && host.starts_with(HOST_PREFIX)
            && host.ends_with(HOST_SUFFIX)
            && host.len() > HOST_PREFIX.len() + SUBDOMAIN_CODE_LEN + HOST_SUFFIX.len()
            && parsed.path().starts_with("/embed")
    }

    async fn resolve(&self, url: &str, ctx: &FetchContext) -> Result<Media, ResolveError> {
        let embed = Url::parse(url)?;
        let (code, playlist_url) = Self::playlist_url(&embed)?;

        let text = ctx.get_text(&playlist_url).await?;
        let playlist = Playlist::parse(&text)?;
        let base = Url::parse(&playlist_url)?;

        let video_url = select_best_video(&playlist, &base)?;
        tracing::debug!(code = %code, "panda hls stream selected");

        Ok(Media {
            kind: MediaKind::HlsDerived,
            video: MediaTrack::new(code.clone(), &code, "ts", video_url),
            audio: None,
        })
    }
}
