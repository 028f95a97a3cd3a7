//! Media resolution core for course-content downloaders.
//!
//! Given an opaque embed URL (Vimeo, YouTube, Panda Video) or a raw HLS
//! playlist, this crate resolves the final downloadable stream URLs: it
//! parses and serializes M3U8 playlists, picks the best rendition, and
//! exposes per-provider resolvers that converge on that selection logic.

pub mod core;
pub mod m3u8;
pub mod models;
pub mod platforms;

pub use crate::core::http::{build_client, FetchContext, FetchError, HttpSettings, ProxySettings};
pub use crate::m3u8::{Playlist, PlaylistError, SelectError, Tag, TagKind, TagValue};
pub use crate::models::media::{Media, MediaKind, MediaTrack};
pub use crate::platforms::{MediaResolver, ResolveError, ResolverRegistry};
