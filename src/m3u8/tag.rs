/// The 22 recognized playlist tags. Anything else is a parse error;
/// there is no lenient mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    ExtM3u,
    ExtXVersion,
    ExtInf,
    ExtXByteRange,
    ExtXDiscontinuity,
    ExtXKey,
    ExtXMap,
    ExtXProgramDateTime,
    ExtXDateRange,
    ExtXTargetDuration,
    ExtXMediaSequence,
    ExtXDiscontinuitySequence,
    ExtXEndList,
    ExtXPlaylistType,
    ExtXIFramesOnly,
    ExtXMedia,
    ExtXStreamInf,
    ExtXIFrameStreamInf,
    ExtXSessionData,
    ExtXSessionKey,
    ExtXIndependentSegments,
    ExtXStart,
}

/// The value syntax a tag kind expects after its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueForm {
    None,
    Single,
    Attributes,
    Items,
}

pub const ALL_TAGS: [TagKind; 22] = [
    TagKind::ExtM3u,
    TagKind::ExtXVersion,
    TagKind::ExtInf,
    TagKind::ExtXByteRange,
    TagKind::ExtXDiscontinuity,
    TagKind::ExtXKey,
    TagKind::ExtXMap,
    TagKind::ExtXProgramDateTime,
    TagKind::ExtXDateRange,
    TagKind::ExtXTargetDuration,
    TagKind::ExtXMediaSequence,
    TagKind::ExtXDiscontinuitySequence,
    TagKind::ExtXEndList,
    TagKind::ExtXPlaylistType,
    TagKind::ExtXIFramesOnly,
    TagKind::ExtXMedia,
    TagKind::ExtXStreamInf,
    TagKind::ExtXIFrameStreamInf,
    TagKind::ExtXSessionData,
    TagKind::ExtXSessionKey,
    TagKind::ExtXIndependentSegments,
    TagKind::ExtXStart,
];

impl TagKind {
    pub fn name(self) -> &'static str {
        match self {
            TagKind::ExtM3u => "EXTM3U",
            TagKind::ExtXVersion => "EXT-X-VERSION",
            TagKind::ExtInf => "EXTINF",
            TagKind::ExtXByteRange => "EXT-X-BYTERANGE",
            TagKind::ExtXDiscontinuity => "EXT-X-DISCONTINUITY",
            TagKind::ExtXKey => "EXT-X-KEY",
            TagKind::ExtXMap => "EXT-X-MAP",
            TagKind::ExtXProgramDateTime => "EXT-X-PROGRAM-DATE-TIME",
            TagKind::ExtXDateRange => "EXT-X-DATERANGE",
            TagKind::ExtXTargetDuration => "EXT-X-TARGETDURATION",
            TagKind::ExtXMediaSequence => "EXT-X-MEDIA-SEQUENCE",
            TagKind::ExtXDiscontinuitySequence => "EXT-X-DISCONTINUITY-SEQUENCE",
            TagKind::ExtXEndList => "EXT-X-ENDLIST",
            TagKind::ExtXPlaylistType => "EXT-X-PLAYLIST-TYPE",
            TagKind::ExtXIFramesOnly => "EXT-X-I-FRAMES-ONLY",
            TagKind::ExtXMedia => "EXT-X-MEDIA",
            TagKind::ExtXStreamInf => "EXT-X-STREAM-INF",
            TagKind::ExtXIFrameStreamInf => "EXT-X-I-FRAME-STREAM-INF",
            TagKind::ExtXSessionData => "EXT-X-SESSION-DATA",
            TagKind::ExtXSessionKey => "EXT-X-SESSION-KEY",
            TagKind::ExtXIndependentSegments => "EXT-X-INDEPENDENT-SEGMENTS",
            TagKind::ExtXStart => "EXT-X-START",
        }
    }

    /// Exact, case-sensitive match against the known tag names.
    pub fn from_name(name: &str) -> Option<TagKind> {
        ALL_TAGS.into_iter().find(|kind| kind.name() == name)
    }

    /// The value form is a fixed function of the tag kind.
    pub fn form(self) -> ValueForm {
        match self {
            TagKind::ExtM3u
            | TagKind::ExtXDiscontinuity
            | TagKind::ExtXEndList
            | TagKind::ExtXIFramesOnly
            | TagKind::ExtXIndependentSegments => ValueForm::None,
            TagKind::ExtXVersion
            | TagKind::ExtXByteRange
            | TagKind::ExtXProgramDateTime
            | TagKind::ExtXTargetDuration
            | TagKind::ExtXMediaSequence
            | TagKind::ExtXDiscontinuitySequence
            | TagKind::ExtXPlaylistType => ValueForm::Single,
            TagKind::ExtXKey
            | TagKind::ExtXMap
            | TagKind::ExtXDateRange
            | TagKind::ExtXMedia
            | TagKind::ExtXStreamInf
            | TagKind::ExtXIFrameStreamInf
            | TagKind::ExtXSessionData
            | TagKind::ExtXSessionKey
            | TagKind::ExtXStart => ValueForm::Attributes,
            TagKind::ExtInf => ValueForm::Items,
        }
    }

    /// Tags that may appear at most once per playlist.
    pub fn once_only(self) -> bool {
        matches!(
            self,
            TagKind::ExtM3u
                | TagKind::ExtXVersion
                | TagKind::ExtXTargetDuration
                | TagKind::ExtXMediaSequence
                | TagKind::ExtXEndList
                | TagKind::ExtXPlaylistType
                | TagKind::ExtXIFramesOnly
        )
    }

    /// Tags that a following plain URI line may attach to.
    pub fn carries_uri(self) -> bool {
        matches!(
            self,
            TagKind::ExtXKey | TagKind::ExtXStreamInf | TagKind::ExtInf
        )
    }
}

/// One `KEY=VALUE` entry of an attribute-list tag. `quoted` records
/// whether the value was double-quoted in the source, so serialization
/// reproduces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub key: String,
    pub value: String,
    pub quoted: bool,
}

impl Attribute {
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }
}

/// A tag's parsed value. The form is the discriminant itself, so it can
/// never disagree with the carried data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagValue {
    None,
    Single(String),
    Attributes(Vec<Attribute>),
    Items(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub kind: TagKind,
    pub value: TagValue,
    pub uri: Option<String>,
}

impl Tag {
    pub fn new(kind: TagKind, value: TagValue) -> Self {
        Self {
            kind,
            value,
            uri: None,
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        match &self.value {
            TagValue::Attributes(attributes) => attributes,
            _ => &[],
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&Attribute> {
        self.attributes().iter().find(|a| a.key == key)
    }

    pub fn attribute_mut(&mut self, key: &str) -> Option<&mut Attribute> {
        match &mut self.value {
            TagValue::Attributes(attributes) => attributes.iter_mut().find(|a| a.key == key),
            _ => None,
        }
    }

    pub fn items(&self) -> &[String] {
        match &self.value {
            TagValue::Items(items) => items,
            _ => &[],
        }
    }

    pub fn scalar(&self) -> Option<&str> {
        match &self.value {
            TagValue::Single(value) => Some(value),
            _ => None,
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = TagValue::Single(value.into());
    }

    pub fn set_uri(&mut self, uri: impl Into<String>) {
        self.uri = Some(uri.into());
    }
}
