/// Parser trait implemented once per container format
use crate::error::ParseFailure;
use hires_core::TrackMetadata;
use std::path::Path;

/// Reads track metadata from files of one container format
///
/// Implementers are registered in a [`ParserRegistry`](crate::ParserRegistry)
/// under the extension they declare.
pub trait MetadataParser: Send + Sync {
    /// File extension handled by this parser, including the leading dot (e.g. `.flac`)
    fn extension(&self) -> &str;

    /// Parse the file at `path`
    ///
    /// # Errors
    /// Returns a [`ParseFailure`] carrying the partially filled metadata when
    /// the file cannot be decoded or lacks required tags
    fn parse_file(&self, path: &Path) -> Result<TrackMetadata, ParseFailure>;
}
