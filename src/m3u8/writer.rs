use std::io;

use super::parser::Playlist;
use super::tag::{Tag, TagValue};

impl Playlist {
    /// Renders the playlist back to M3U8 text. For any playlist produced
    /// by [`Playlist::parse`], parsing the dump yields an equal playlist.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for tag in &self.tags {
            render_tag(tag, &mut out);
        }
        out
    }

    /// Writes the rendered playlist to a sink.
    pub fn dump_to<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(self.dump().as_bytes())
    }
}

// Backslashes in URIs are host-OS path artifacts left over from on-disk
// playlist rewriting; they always mean forward slashes here.
fn normalize_separators(value: &str) -> String {
    value.replace('\\', "/")
}

fn render_tag(tag: &Tag, out: &mut String) {
    out.push('#');
    out.push_str(tag.kind.name());

    match &tag.value {
        TagValue::None => {}
        TagValue::Single(value) => {
            out.push(':');
            out.push_str(value);
        }
        TagValue::Attributes(attributes) => {
            for (index, attribute) in attributes.iter().enumerate() {
                out.push(if index == 0 { ':' } else { ',' });
                out.push_str(&attribute.key);
                out.push('=');

                if attribute.quoted {
                    out.push('"');
                }

                if attribute.key == "URI" {
                    out.push_str(&normalize_separators(&attribute.value));
                } else {
                    out.push_str(&attribute.value);
                }

                if attribute.quoted {
                    out.push('"');
                }
            }
        }
        TagValue::Items(items) => {
            out.push(':');
            out.push_str(&items.join(","));
        }
    }

    out.push('\n');

    if let Some(uri) = &tag.uri {
        out.push_str(&normalize_separators(uri));
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::m3u8::tag::{Attribute, TagKind};

    const MASTER: &str = "#EXTM3U\n\
#EXT-X-VERSION:3\n\
#EXT-X-MEDIA:TYPE=AUDIO,GROUP-ID=\"aud\",URI=\"audio/stereo.m3u8\"\n\
#EXT-X-STREAM-INF:BANDWIDTH=800000,RESOLUTION=640x360,AUDIO=\"aud\"\n\
360/video.m3u8\n\
#EXT-X-STREAM-INF:BANDWIDTH=2800000,RESOLUTION=1280x720,AUDIO=\"aud\"\n\
720/video.m3u8\n";

    const MEDIA: &str = "#EXTM3U\n\
#EXT-X-VERSION:3\n\
#EXT-X-TARGETDURATION:10\n\
#EXT-X-MEDIA-SEQUENCE:0\n\
#EXTINF:9.8\n\
seg0.ts\n\
#EXTINF:10.0\n\
seg1.ts\n\
#EXT-X-ENDLIST\n";

    #[test]
    fn master_playlist_round_trips() {
        let playlist = Playlist::parse(MASTER).unwrap();
        let dumped = playlist.dump();
        assert_eq!(Playlist::parse(&dumped).unwrap(), playlist);
    }

    #[test]
    fn media_playlist_round_trips() {
        let playlist = Playlist::parse(MEDIA).unwrap();
        let dumped = playlist.dump();
        assert_eq!(Playlist::parse(&dumped).unwrap(), playlist);
    }

    #[test]
    fn dump_is_exact_for_canonical_input() {
        let playlist = Playlist::parse(MEDIA).unwrap();
        assert_eq!(playlist.dump(), MEDIA);
    }

    #[test]
    fn uri_lines_get_forward_slashes() {
        let mut playlist = Playlist::parse("#EXTM3U\n#EXTINF:10.0,\nseg0.ts\n").unwrap();
        playlist.tags[1].set_uri("segments\\seg0.ts");
        assert!(playlist.dump().contains("segments/seg0.ts\n"));
    }

    #[test]
    fn uri_attribute_values_get_forward_slashes() {
        let mut playlist =
            Playlist::parse("#EXTM3U\n#EXT-X-KEY:METHOD=AES-128,URI=\"key.bin\"\n").unwrap();
        playlist.tags[1]
            .attribute_mut("URI")
            .unwrap()
            .set_value("keys\\key.bin");
        assert!(playlist.dump().contains("URI=\"keys/key.bin\""));
    }

    #[test]
    fn non_uri_attributes_keep_backslashes() {
        let playlist = Playlist {
            tags: vec![
                Tag::new(TagKind::ExtM3u, TagValue::None),
                Tag::new(
                    TagKind::ExtXSessionData,
                    TagValue::Attributes(vec![Attribute {
                        key: "DATA-ID".into(),
                        value: "a\\b".into(),
                        quoted: true,
                    }]),
                ),
            ],
        };
        assert!(playlist.dump().contains("DATA-ID=\"a\\b\""));
    }

    #[test]
    fn dump_to_writes_same_bytes() {
        let playlist = Playlist::parse(MEDIA).unwrap();
        let mut sink: Vec<u8> = Vec::new();
        playlist.dump_to(&mut sink).unwrap();
        assert_eq!(sink, playlist.dump().into_bytes());
    }
}
