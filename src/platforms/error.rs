use thiserror::Error;

use crate::core::http::FetchError;
use crate::m3u8::{PlaylistError, SelectError};

/// Errors surfaced by provider resolvers.
///
/// Only `NoStreamsAvailable` is meant to be survivable by a batch job
/// (the caller skips that media item); every other kind aborts the
/// current item. Nothing is retried at this layer.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("required key missing from provider payload: {0}")]
    MissingRequiredKey(&'static str),
    #[error("provider payload field has unexpected type: {0}")]
    NonMatchingType(&'static str),
    #[error("provider payload could not be parsed")]
    CannotParse,
    #[error("expected marker not found in provider page")]
    MarkerNotFound,
    #[error("no playable streams available")]
    NoStreamsAvailable,
    #[error("rendition tag is missing required attribute {0}")]
    MissingRequiredAttribute(&'static str),
    #[error("embed url not recognized by this resolver")]
    UnsupportedUrl,
    #[error(transparent)]
    Playlist(#[from] PlaylistError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}

impl ResolveError {
    /// Whether a caller iterating a catalog should skip this media item
    /// and keep going instead of failing the batch.
    pub fn is_skippable(&self) -> bool {
        matches!(self, ResolveError::NoStreamsAvailable)
    }
}

impl From<SelectError> for ResolveError {
    fn from(err: SelectError) -> Self {
        match err {
            SelectError::NoStreamsAvailable => ResolveError::NoStreamsAvailable,
            SelectError::MissingRequiredAttribute(name) => {
                ResolveError::MissingRequiredAttribute(name)
            }
            SelectError::Url(err) => ResolveError::Url(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_no_streams_is_skippable() {
        assert!(ResolveError::NoStreamsAvailable.is_skippable());
        assert!(!ResolveError::CannotParse.is_skippable());
        assert!(!ResolveError::MissingRequiredKey("x").is_skippable());
    }

    #[test]
    fn select_errors_map_to_resolver_kinds() {
        assert!(matches!(
            ResolveError::from(SelectError::NoStreamsAvailable),
            ResolveError::NoStreamsAvailable
        ));
        assert!(matches!(
            ResolveError::from(SelectError::MissingRequiredAttribute("TYPE")),
            ResolveError::MissingRequiredAttribute("TYPE")
        ));
    }
}
