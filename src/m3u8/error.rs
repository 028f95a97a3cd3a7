use thiserror::Error;

/// Errors produced while parsing playlist text. All of these abort the
/// parse; the parser never returns a partial playlist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    #[error("playlist structure is invalid")]
    PlaylistInvalid,
    #[error("line {0} exceeds the maximum tag line length")]
    LineTooLong(usize),
    #[error("line {0} ends with a continuation but the input ended")]
    LineUnterminated(usize),
    #[error("unrecognized or malformed tag name {0:?}")]
    TagNameInvalid(String),
    #[error("tag #{0} appears more than once")]
    TagDuplicate(&'static str),
    #[error("tag #{0} is missing its value")]
    TagMissingValue(&'static str),
    #[error("tag #{0} is missing its attribute list")]
    TagMissingAttributes(&'static str),
    #[error("tag #{0} is missing its item list")]
    TagMissingItems(&'static str),
    #[error("tag #{0} does not accept a value")]
    TagTrailingOptions(&'static str),
    #[error("attribute name {0:?} contains invalid characters")]
    AttributeNameInvalid(String),
    #[error("attribute is missing its name")]
    AttributeMissingName,
    #[error("attribute {0:?} is missing its value")]
    AttributeMissingValue(String),
    #[error("empty attribute in list")]
    AttributeEmpty,
    #[error("attribute {0:?} appears more than once in the same tag")]
    AttributeDuplicate(String),
    #[error("unterminated string literal in attribute value")]
    UnterminatedStringLiteral,
}

/// Errors produced while picking a rendition out of a parsed playlist.
///
/// `NoStreamsAvailable` is the one recoverable kind: callers skip the
/// media item and move on. Everything else means the upstream playlist
/// is malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("rendition tag is missing required attribute {0}")]
    MissingRequiredAttribute(&'static str),
    #[error("playlist contains no qualifying streams")]
    NoStreamsAvailable,
    #[error("cannot resolve rendition uri against playlist url: {0}")]
    Url(#[from] url::ParseError),
}
