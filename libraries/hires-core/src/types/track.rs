/// Track metadata domain type
use serde::{Deserialize, Serialize};

/// Identity and technical quality of one track.
///
/// The same shape is used for local files and for remote catalog results.
/// For a local file `file_path` is the filesystem path and `audio_md5` is the
/// checksum of the decoded samples; for a catalog result `file_path` holds the
/// catalog page URL and `audio_md5` is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackMetadata {
    /// Filesystem path, or catalog page URL for remote results
    pub file_path: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Bits per sample
    pub bit_depth: u32,

    /// Lowercase hex checksum of the decoded audio (empty for remote results)
    pub audio_md5: String,
}

impl TrackMetadata {
    /// Create a record carrying only the path
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            ..Self::default()
        }
    }

    /// Free-text keyword used to look this track up in a catalog
    pub fn search_keyword(&self) -> String {
        format!("{} {}", self.title, self.artist)
    }

    /// Whether `self` is a better-resolution version than `local`.
    ///
    /// Improving on either axis is enough: a higher bit depth OR a higher
    /// sample rate qualifies.
    pub fn is_upgrade_over(&self, local: &TrackMetadata) -> bool {
        self.bit_depth > local.bit_depth || self.sample_rate > local.sample_rate
    }
}
