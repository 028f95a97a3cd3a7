use url::Url;

use super::error::SelectError;
use super::parser::Playlist;
use super::tag::{Tag, TagKind};

fn resolution_width(tag: &Tag) -> Result<u32, SelectError> {
    let resolution = tag
        .attribute("RESOLUTION")
        .ok_or(SelectError::MissingRequiredAttribute("RESOLUTION"))?;

    resolution
        .value
        .split_once('x')
        .and_then(|(width, _)| width.parse::<u32>().ok())
        .ok_or(SelectError::MissingRequiredAttribute("RESOLUTION"))
}

/// Picks the variant stream with the greatest resolution width and joins
/// its URI against the playlist's own URL.
///
/// Comparison is strict, so among equal widths the first one wins. A
/// variant without RESOLUTION (or with a malformed one) is a hard error;
/// a playlist with no variants at all is `NoStreamsAvailable`.
pub fn select_best_video(playlist: &Playlist, base: &Url) -> Result<Url, SelectError> {
    let mut best_width = 0u32;
    let mut best: Option<&Tag> = None;

    for tag in playlist.tags.iter().filter(|t| t.kind == TagKind::ExtXStreamInf) {
        let width = resolution_width(tag)?;

        if best_width < width {
            best_width = width;
            best = Some(tag);
        }
    }

    let tag = best.ok_or(SelectError::NoStreamsAvailable)?;
    let uri = tag
        .uri
        .as_deref()
        .ok_or(SelectError::MissingRequiredAttribute("URI"))?;

    Ok(base.join(uri)?)
}

/// Returns the URI of the first `EXT-X-MEDIA` tag whose TYPE is AUDIO,
/// joined against the playlist's own URL. Scanning stops at the first
/// match; a playlist without audio renditions yields `None`.
pub fn select_best_audio(playlist: &Playlist, base: &Url) -> Result<Option<Url>, SelectError> {
    for tag in playlist.tags.iter().filter(|t| t.kind == TagKind::ExtXMedia) {
        let media_type = tag
            .attribute("TYPE")
            .ok_or(SelectError::MissingRequiredAttribute("TYPE"))?;

        if media_type.value != "AUDIO" {
            continue;
        }

        let uri = tag
            .attribute("URI")
            .ok_or(SelectError::MissingRequiredAttribute("URI"))?;

        return Ok(Some(base.join(&uri.value)?));
    }

    Ok(None)
}
