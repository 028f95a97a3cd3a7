//! M3U8 playlist engine: line reading, parsing, serialization and
//! rendition selection (RFC 8216 subset).

pub mod error;
pub mod line;
pub mod parser;
pub mod select;
pub mod tag;
pub mod writer;

pub use error::{PlaylistError, SelectError};
pub use line::{Line, LineReader};
pub use parser::{Playlist, MAX_LINE_LEN};
pub use select::{select_best_audio, select_best_video};
pub use tag::{Attribute, Tag, TagKind, TagValue, ValueForm};
