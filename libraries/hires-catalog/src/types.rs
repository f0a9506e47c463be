//! Catalog configuration and mora.jp wire types.

use crate::error::{CatalogError, Result};
use hires_core::TrackMetadata;
use serde::{Deserialize, Deserializer, Serialize};
use std::time::Duration;

/// mora.jp track search endpoint
pub const MORA_SEARCH_URL: &str = "https://mora.jp/search/getResult";

/// Connection settings for a catalog provider
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Full search endpoint URL
    pub endpoint: String,

    /// Ask the catalog to return hi-res entries only
    pub only_hires: bool,

    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,

    /// User-Agent header sent with every request
    pub user_agent: String,
}

impl CatalogConfig {
    /// Settings for `endpoint` with every other field at its default
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Self::default()
        }
    }

    /// Set the per-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set whether to restrict results to hi-res entries
    pub fn only_hires(mut self, only_hires: bool) -> Self {
        self.only_hires = only_hires;
        self
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: MORA_SEARCH_URL.to_string(),
            only_hires: true,
            timeout: None,
            user_agent: format!("hires-checker/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Top-level search response envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoraResponse {
    pub head: Option<MoraResponseHead>,
    pub data: Option<MoraResponseData>,
}

impl MoraResponse {
    /// The track result list, if the response carries one
    pub fn into_track_results(self) -> Option<MoraTrackResultList> {
        self.data?.track_result
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoraResponseHead {
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,

    #[serde(rename = "successFlg", default, deserialize_with = "null_as_default")]
    pub success_flag: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoraResponseData {
    #[serde(rename = "trackResult")]
    pub track_result: Option<MoraTrackResultList>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoraTrackResultList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub list: Vec<MoraTrackResult>,

    #[serde(default)]
    pub total: u64,
}

/// One search hit
///
/// Missing fields take their zero value. `bitPerSample` arrives as a string
/// and is only validated when converted with [`MoraTrackResult::to_metadata`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoraTrackResult {
    pub dist_part_no: String,
    pub material_no: i64,
    pub artist_name: String,
    pub track_title: String,
    pub package_id: String,
    pub package_no: i64,
    pub package_title: String,
    pub package_page: String,
    pub sampling_freq: u32,
    pub bit_per_sample: String,
    pub price: i64,
    pub start_date: String,
}

impl MoraTrackResult {
    /// `bitPerSample` as an integer
    ///
    /// Any signed decimal is accepted; negative values read as 0 so they
    /// never count as an upgrade.
    ///
    /// # Errors
    /// [`CatalogError::InvalidBitDepth`] when the value is not a decimal
    /// integer.
    pub fn bit_depth(&self) -> Result<u32> {
        let value: i64 =
            self.bit_per_sample
                .parse()
                .map_err(|source| CatalogError::InvalidBitDepth {
                    value: self.bit_per_sample.clone(),
                    track: self.track_title.clone(),
                    source,
                })?;
        Ok(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
    }

    /// Convert to the shared metadata record
    ///
    /// The store page URL takes the place of a file path, and there is no
    /// audio digest for a remote track.
    pub fn to_metadata(&self) -> Result<TrackMetadata> {
        Ok(TrackMetadata {
            file_path: self.package_page.clone(),
            title: self.track_title.clone(),
            artist: self.artist_name.clone(),
            album: self.package_title.clone(),
            sample_rate: self.sampling_freq,
            bit_depth: self.bit_depth()?,
            audio_md5: String::new(),
        })
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
