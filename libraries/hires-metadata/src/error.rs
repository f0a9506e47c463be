/// Metadata-specific errors
use hires_core::TrackMetadata;
use thiserror::Error;

/// Result type alias using `MetadataError`
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Metadata error types
#[derive(Error, Debug)]
pub enum MetadataError {
    /// File is not a valid instance of the container format
    #[error("Decode error: {0}")]
    Decode(String),

    /// Stream-info block missing or malformed
    #[error("Invalid stream info: {0}")]
    StreamInfo(String),

    /// No descriptive comment block anywhere in the file
    #[error("No tags: file has no VORBIS_COMMENT block")]
    NoTags,

    /// Comment block present but a required field is absent or empty
    #[error("{field} empty, comments: {comments:?}")]
    MissingField {
        field: String,
        comments: Vec<String>,
    },

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A failed parse, together with everything decoded before the failure.
///
/// `partial` always carries the file path, so callers can log which file
/// broke; technical fields are filled in when the stream info was read.
#[derive(Error, Debug)]
#[error("Failed to parse {}: {error}", .partial.file_path)]
pub struct ParseFailure {
    pub partial: TrackMetadata,
    #[source]
    pub error: MetadataError,
}

impl ParseFailure {
    pub fn new(partial: TrackMetadata, error: MetadataError) -> Self {
        Self { partial, error }
    }
}

/// Library scan errors
#[derive(Error, Debug)]
pub enum ScanError {
    /// Scan root does not exist
    #[error("Scan root not found: {0}")]
    RootNotFound(String),

    /// Directory traversal failed
    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// A supported file could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseFailure),
}
