//! Hi-Res Checker
//!
//! Walks a local FLAC library, looks every track up in a remote catalog and
//! reports the ones that can be bought in a higher resolution.
//!
//! The binary wires these modules together; they are exposed as a library so
//! the whole pipeline can be driven from tests.

pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod runner;

pub use config::CheckerConfig;
pub use error::{CheckerError, Result};
pub use runner::{Checker, RunSummary};
