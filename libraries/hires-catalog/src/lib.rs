//! Hi-Res Checker Catalog
//!
//! Remote catalog lookups: given a local track, find commercially available
//! versions with a higher sample rate or bit depth.
//!
//! # Features
//!
//! - **Provider trait**: `CatalogProvider`, one implementation per store
//! - **mora.jp**: `MoraProvider`, keyword search restricted to hi-res entries
//! - **Upgrade filter**: only results that beat the local file on either axis
//!   are returned
//!
//! # Example
//!
//! ```ignore
//! use hires_catalog::{CatalogConfig, CatalogProvider, MoraProvider};
//! use hires_core::TrackMetadata;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = MoraProvider::new(CatalogConfig::default())?;
//!
//!     let mut local = TrackMetadata::new("/music/song.flac");
//!     local.title = "Song".into();
//!     local.artist = "Band".into();
//!     local.sample_rate = 44_100;
//!     local.bit_depth = 16;
//!
//!     for candidate in provider.search(&local).await? {
//!         println!("{} {}bit/{}Hz", candidate.file_path, candidate.bit_depth, candidate.sample_rate);
//!     }
//!
//!     Ok(())
//! }
//! ```

mod error;
mod mora;
mod provider;
mod types;

// Re-export main types
pub use error::{CatalogError, Result};
pub use mora::MoraProvider;
pub use provider::CatalogProvider;
pub use types::{
    CatalogConfig, MoraResponse, MoraResponseData, MoraResponseHead, MoraTrackResult,
    MoraTrackResultList, MORA_SEARCH_URL,
};
