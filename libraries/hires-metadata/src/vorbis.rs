/// Vorbis comment lookup
use crate::error::{MetadataError, Result};
use metaflac::block::VorbisComment;

/// Track title field name
pub const FIELD_TITLE: &str = "TITLE";
/// Track artist field name
pub const FIELD_ARTIST: &str = "ARTIST";
/// Album title field name
pub const FIELD_ALBUM: &str = "ALBUM";

/// Flattened VORBIS_COMMENT block
///
/// Comments are kept as `KEY=value` strings so they can be echoed back in
/// diagnostics. Keys are sorted; values under one key keep file order.
/// Keys are case-insensitive and may repeat.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VorbisComments {
    /// Encoder vendor string
    pub vendor: String,

    /// `KEY=value` entries
    pub comments: Vec<String>,
}

impl VorbisComments {
    /// Flatten a decoded comment block
    pub fn from_block(block: &VorbisComment) -> Self {
        let mut keys: Vec<&String> = block.comments.keys().collect();
        keys.sort();

        let comments = keys
            .into_iter()
            .flat_map(|key| {
                block.comments[key]
                    .iter()
                    .map(move |value| format!("{key}={value}"))
            })
            .collect();

        Self {
            vendor: block.vendor_string.clone(),
            comments,
        }
    }

    /// All non-empty values stored under `field`
    pub fn get(&self, field: &str) -> Vec<&str> {
        self.comments
            .iter()
            .filter_map(|comment| comment.split_once('='))
            .filter(|(key, value)| key.eq_ignore_ascii_case(field) && !value.is_empty())
            .map(|(_, value)| value)
            .collect()
    }

    /// First value stored under `field`
    ///
    /// # Errors
    /// Returns [`MetadataError::MissingField`] naming the field and echoing
    /// every comment when the field has no value.
    pub fn first(&self, field: &str) -> Result<&str> {
        self.get(field)
            .first()
            .copied()
            .ok_or_else(|| MetadataError::MissingField {
                field: field.to_string(),
                comments: self.comments.clone(),
            })
    }
}
