/// FLAC metadata parser
///
/// Only the metadata section at the head of the stream is read; audio frames
/// are never touched.
use crate::error::{MetadataError, ParseFailure, Result};
use crate::parser::MetadataParser;
use crate::vorbis::{VorbisComments, FIELD_ALBUM, FIELD_ARTIST, FIELD_TITLE};
use hires_core::TrackMetadata;
use metaflac::{Block, Tag};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Metadata parser for FLAC files
#[derive(Debug, Clone, Copy, Default)]
pub struct FlacParser;

impl FlacParser {
    /// Create a new FLAC parser
    pub fn new() -> Self {
        Self
    }

    /// Parse FLAC metadata from any reader positioned at the start of the stream.
    ///
    /// `file_path` is only recorded in the returned metadata.
    pub fn parse_reader<R: Read>(
        &self,
        mut reader: R,
        file_path: &str,
    ) -> std::result::Result<TrackMetadata, ParseFailure> {
        let mut metadata = TrackMetadata::new(file_path);

        let applied = Tag::read_from(&mut reader)
            .map_err(|e| MetadataError::Decode(e.to_string()))
            .and_then(|tag| apply_tag(&tag, &mut metadata));

        match applied {
            Ok(()) => Ok(metadata),
            Err(error) => Err(ParseFailure::new(metadata, error)),
        }
    }
}

impl MetadataParser for FlacParser {
    fn extension(&self) -> &str {
        ".flac"
    }

    fn parse_file(&self, path: &Path) -> std::result::Result<TrackMetadata, ParseFailure> {
        let file_path = path.to_string_lossy();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                return Err(ParseFailure::new(
                    TrackMetadata::new(file_path),
                    MetadataError::Io(e),
                ))
            }
        };

        self.parse_reader(BufReader::new(file), &file_path)
    }
}

/// Fill `metadata` from a decoded tag.
///
/// Technical fields are written as soon as STREAMINFO is read so they
/// survive a later tag failure. The first comment block carrying all
/// required fields wins; later comment blocks are ignored. When no block is
/// complete, the error of the first incomplete one is returned.
fn apply_tag(tag: &Tag, metadata: &mut TrackMetadata) -> Result<()> {
    let info = tag
        .get_streaminfo()
        .ok_or_else(|| MetadataError::StreamInfo("no STREAMINFO block".to_string()))?;
    if info.sample_rate == 0 {
        return Err(MetadataError::StreamInfo("sample rate is zero".to_string()));
    }

    metadata.bit_depth = u32::from(info.bits_per_sample);
    metadata.sample_rate = info.sample_rate;
    metadata.audio_md5 = hex::encode(&info.md5);

    let mut first_error = None;
    for block in tag.blocks() {
        let Block::VorbisComment(block) = block else {
            continue;
        };

        let comments = VorbisComments::from_block(block);
        match required_tags(&comments) {
            Ok((title, artist, album)) => {
                metadata.title = title.to_string();
                metadata.artist = artist.to_string();
                metadata.album = album.to_string();
                return Ok(());
            }
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    Err(first_error.unwrap_or(MetadataError::NoTags))
}

fn required_tags(comments: &VorbisComments) -> Result<(&str, &str, &str)> {
    Ok((
        comments.first(FIELD_TITLE)?,
        comments.first(FIELD_ARTIST)?,
        comments.first(FIELD_ALBUM)?,
    ))
}
