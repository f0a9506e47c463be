//! Hi-Res Checker Metadata
//!
//! Metadata extraction and library scanning for Hi-Res Checker.
//!
//! This crate provides:
//! - A FLAC metadata parser (STREAMINFO + VORBIS_COMMENT) on top of `metaflac`
//! - A parser registry keyed by file extension
//! - Library scanning that feeds every supported file through the registry
//!
//! # Example
//!
//! ```rust,no_run
//! use hires_metadata::{LibraryScanner, ParseOutcome, ParserRegistry};
//! use std::path::Path;
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Read metadata from a single file
//! let registry = ParserRegistry::new();
//! match registry.parse_file(Path::new("/music/song.flac")) {
//!     ParseOutcome::Parsed(track) => println!("{} - {}", track.artist, track.title),
//!     ParseOutcome::Failed(failure) => return Err(failure.into()),
//!     ParseOutcome::Skipped => println!("not an audio file"),
//! }
//!
//! // Scan a whole library, stopping at the first broken file
//! let scanner = LibraryScanner::new(ParserRegistry::new());
//! let tracks = scanner.scan(Path::new("/music"))?;
//! println!("Found {} tracks", tracks.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod flac;
mod parser;
mod registry;
mod scanner;
mod vorbis;

pub use error::{MetadataError, ParseFailure, Result, ScanError};
pub use flac::FlacParser;
pub use parser::MetadataParser;
pub use registry::{ParseOutcome, ParserRegistry};
pub use scanner::LibraryScanner;
pub use vorbis::{VorbisComments, FIELD_ALBUM, FIELD_ARTIST, FIELD_TITLE};
