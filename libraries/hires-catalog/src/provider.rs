//! Catalog provider trait.

use crate::error::Result;
use async_trait::async_trait;
use hires_core::TrackMetadata;

/// A remote store that can be searched for better versions of a track.
///
/// Providers are stateless between calls: searching twice with the same
/// input against the same catalog state gives the same answer.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &str;

    /// Search for upgrade candidates of `local`.
    ///
    /// Returns only results whose bit depth or sample rate strictly exceeds
    /// the local file's. An empty list means no upgrade exists; it is not an
    /// error.
    async fn search(&self, local: &TrackMetadata) -> Result<Vec<TrackMetadata>>;
}
