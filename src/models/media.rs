use serde::{Deserialize, Serialize};

/// How the resolved media must be downloaded later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    /// One direct progressive file URL.
    Single,
    /// Stream URLs derived from an HLS master playlist; audio and video
    /// may be separate tracks that need muxing afterwards.
    HlsDerived,
}

/// One downloadable track. `short_filename` is an id-based ASCII name
/// kept for path-length-limited filesystems.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTrack {
    pub id: String,
    pub filename: String,
    pub short_filename: String,
    pub url: String,
}

impl MediaTrack {
    pub fn new(
        id: impl Into<String>,
        title: &str,
        extension: &str,
        url: impl Into<String>,
    ) -> Self {
        let id = id.into();
        Self {
            filename: crate::core::filename::with_extension(title, extension),
            short_filename: format!("{}.{}", id, extension),
            id,
            url: url.into(),
        }
    }
}

/// The output of a provider resolver, consumed by the downloader layer.
/// Populated once by a resolver call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    pub kind: MediaKind,
    pub video: MediaTrack,
    pub audio: Option<MediaTrack>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_filenames_follow_title_and_id() {
        let track = MediaTrack::new("abc123", "Aula 01: Introdução", "mp4", "https://x/y.mp4");
        assert_eq!(track.short_filename, "abc123.mp4");
        assert!(track.filename.ends_with(".mp4"));
        assert!(!track.filename.contains(':'));
    }
}
