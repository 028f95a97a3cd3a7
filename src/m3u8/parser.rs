use std::borrow::Cow;
use std::collections::HashSet;

use super::error::PlaylistError;
use super::line::{Line, LineReader};
use super::tag::{Attribute, Tag, TagKind, TagValue, ValueForm};

/// Maximum length of an assembled tag line, continuations included.
pub const MAX_LINE_LEN: usize = 10 * 1024;

/// A parsed playlist: the ordered tag sequence of one M3U8 document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Playlist {
    pub tags: Vec<Tag>,
}

impl Playlist {
    /// Parses M3U8 text into a playlist.
    ///
    /// The first line must be `#EXTM3U`, unknown tags are rejected, and
    /// any structural violation aborts the whole parse. No I/O happens
    /// here; the call is pure and reentrant.
    pub fn parse(text: &str) -> Result<Playlist, PlaylistError> {
        let mut reader = LineReader::new(text);
        let mut tags: Vec<Tag> = Vec::new();
        let mut seen: HashSet<TagKind> = HashSet::new();
        let mut first = true;

        while let Some(line) = reader.next() {
            if line.text.starts_with("#EXT") {
                let assembled = assemble_tag_line(line, &mut reader)?;
                tags.push(parse_tag(&assembled, first, &mut seen)?);
            } else if line.text.starts_with('#') {
                // Comment. Still counts as the first classified line.
                if first {
                    return Err(PlaylistError::PlaylistInvalid);
                }
            } else {
                if first {
                    return Err(PlaylistError::PlaylistInvalid);
                }
                attach_uri(&mut tags, line.text)?;
            }

            first = false;
        }

        if tags.is_empty() {
            return Err(PlaylistError::PlaylistInvalid);
        }

        Ok(Playlist { tags })
    }
}

fn attach_uri(tags: &mut [Tag], uri: &str) -> Result<(), PlaylistError> {
    let tag = tags.last_mut().ok_or(PlaylistError::PlaylistInvalid)?;

    if !tag.kind.carries_uri() || tag.uri.is_some() {
        return Err(PlaylistError::PlaylistInvalid);
    }

    tag.uri = Some(uri.to_string());
    Ok(())
}

fn trim_end(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == ' ' || c.is_ascii_control())
}

/// Joins backslash-continued tag lines into one logical line, capped at
/// `MAX_LINE_LEN`.
fn assemble_tag_line<'a>(
    line: Line<'a>,
    reader: &mut LineReader<'a>,
) -> Result<Cow<'a, str>, PlaylistError> {
    if line.text.len() > MAX_LINE_LEN {
        return Err(PlaylistError::LineTooLong(line.index));
    }

    let Some(stripped) = line.text.strip_suffix('\\') else {
        return Ok(Cow::Borrowed(line.text));
    };

    let mut assembled = trim_end(stripped).to_string();

    loop {
        let next = reader
            .next()
            .ok_or(PlaylistError::LineUnterminated(line.index))?;

        let (chunk, continued) = match next.text.strip_suffix('\\') {
            Some(stripped) => (trim_end(stripped), true),
            None => (next.text, false),
        };

        assembled.push_str(chunk);

        if assembled.len() > MAX_LINE_LEN {
            return Err(PlaylistError::LineTooLong(line.index));
        }

        if !continued {
            return Ok(Cow::Owned(assembled));
        }
    }
}

fn is_tag_name_char(ch: char) -> bool {
    ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '-'
}

fn parse_tag(
    text: &str,
    first: bool,
    seen: &mut HashSet<TagKind>,
) -> Result<Tag, PlaylistError> {
    let body = &text[1..];
    let (name, rest) = match body.find(':') {
        Some(at) => (&body[..at], Some(&body[at + 1..])),
        None => (body, None),
    };

    if name.is_empty() || !name.chars().all(is_tag_name_char) {
        return Err(PlaylistError::TagNameInvalid(name.to_string()));
    }

    let kind = TagKind::from_name(name)
        .ok_or_else(|| PlaylistError::TagNameInvalid(name.to_string()))?;

    if first && kind != TagKind::ExtM3u {
        return Err(PlaylistError::PlaylistInvalid);
    }

    if kind.once_only() && !seen.insert(kind) {
        return Err(PlaylistError::TagDuplicate(kind.name()));
    }

    let value = match kind.form() {
        ValueForm::None => {
            if rest.is_some() {
                return Err(PlaylistError::TagTrailingOptions(kind.name()));
            }
            TagValue::None
        }
        ValueForm::Single => match rest {
            Some(value) if !value.is_empty() => TagValue::Single(value.to_string()),
            _ => return Err(PlaylistError::TagMissingValue(kind.name())),
        },
        ValueForm::Attributes => match rest {
            Some(value) if !value.is_empty() => TagValue::Attributes(parse_attributes(value)?),
            _ => return Err(PlaylistError::TagMissingAttributes(kind.name())),
        },
        ValueForm::Items => match rest {
            Some(value) if !value.is_empty() => TagValue::Items(
                value
                    .split(',')
                    .filter(|item| !item.is_empty())
                    .map(str::to_string)
                    .collect(),
            ),
            _ => return Err(PlaylistError::TagMissingItems(kind.name())),
        },
    };

    Ok(Tag::new(kind, value))
}

/// Parses a comma-separated `KEY=VALUE` list. Double-quoted values may
/// contain commas; text between a closing quote and the next comma is
/// dropped.
fn parse_attributes(text: &str) -> Result<Vec<Attribute>, PlaylistError> {
    let mut attributes: Vec<Attribute> = Vec::new();
    let mut pos = 0;

    while pos <= text.len() {
        let segment_end = text[pos..].find(',').map_or(text.len(), |at| pos + at);

        if segment_end == pos {
            return Err(PlaylistError::AttributeEmpty);
        }

        let segment = &text[pos..segment_end];
        let Some(eq) = segment.find('=') else {
            return Err(PlaylistError::AttributeMissingValue(segment.to_string()));
        };

        let key = &segment[..eq];

        if key.is_empty() {
            return Err(PlaylistError::AttributeMissingName);
        }

        if !key.chars().all(is_tag_name_char) {
            return Err(PlaylistError::AttributeNameInvalid(key.to_string()));
        }

        if attributes.iter().any(|a| a.key == key) {
            return Err(PlaylistError::AttributeDuplicate(key.to_string()));
        }

        let value_start = pos + eq + 1;
        let (value, quoted, next_pos) = if text[value_start..].starts_with('"') {
            let inner = value_start + 1;
            let close = text[inner..]
                .find('"')
                .map(|at| inner + at)
                .ok_or(PlaylistError::UnterminatedStringLiteral)?;
            let next = text[close + 1..]
                .find(',')
                .map_or(text.len() + 1, |at| close + 1 + at + 1);
            (text[inner..close].to_string(), true, next)
        } else {
            let value = &segment[eq + 1..];
            if value.is_empty() {
                return Err(PlaylistError::AttributeMissingValue(key.to_string()));
            }
            (value.to_string(), false, segment_end + 1)
        };

        attributes.push(Attribute {
            key: key.to_string(),
            value,
            quoted,
        });

        pos = next_pos;
    }

    Ok(attributes)
}
