//! Hi-Res Checker Core
//!
//! Platform-agnostic types shared by the metadata parsers, the remote catalog
//! providers and the checker application.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `TrackMetadata`, the one record describing a track,
//!   whether it was read from a local file or converted from a catalog result
//! - **Upgrade Policy**: `TrackMetadata::is_upgrade_over`, the resolution
//!   comparison applied to catalog results
//!
//! # Example
//!
//! ```rust
//! use hires_core::TrackMetadata;
//!
//! let mut local = TrackMetadata::new("/music/song.flac");
//! local.sample_rate = 44_100;
//! local.bit_depth = 16;
//!
//! let mut remote = TrackMetadata::new("https://mora.jp/package/43000001/00000000000000000001/");
//! remote.sample_rate = 96_000;
//! remote.bit_depth = 24;
//!
//! assert!(remote.is_upgrade_over(&local));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain types
pub mod types;

pub use types::TrackMetadata;
