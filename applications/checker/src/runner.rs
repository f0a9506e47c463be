/// Scan-then-search pipeline
use crate::error::{CheckerError, Result};
use crate::report;
use hires_catalog::CatalogProvider;
use hires_metadata::LibraryScanner;
use std::path::Path;
use tracing::info;

/// Totals of one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Local tracks parsed
    pub tracks: usize,

    /// Local tracks with at least one upgrade candidate
    pub upgraded: usize,

    /// Upgrade candidates across all tracks
    pub candidates: usize,
}

/// Drives one check of a library against a catalog
///
/// The whole library is scanned before the first search. Searches run one
/// at a time in scan order, and the first error from either phase ends the
/// run.
pub struct Checker<P> {
    scanner: LibraryScanner,
    provider: P,
}

impl<P: CatalogProvider> Checker<P> {
    pub fn new(scanner: LibraryScanner, provider: P) -> Self {
        Self { scanner, provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Scan `root`, search every track and report the results
    pub async fn run(&self, root: &Path) -> Result<RunSummary> {
        let tracks = self.scanner.scan(root)?;

        info!(
            tracks = tracks.len(),
            provider = self.provider.name(),
            "Searching catalog"
        );

        let mut summary = RunSummary {
            tracks: tracks.len(),
            ..RunSummary::default()
        };

        for track in &tracks {
            let candidates =
                self.provider
                    .search(track)
                    .await
                    .map_err(|source| CheckerError::Search {
                        path: track.file_path.clone(),
                        source,
                    })?;

            report::report(track, &candidates);

            if !candidates.is_empty() {
                summary.upgraded += 1;
                summary.candidates += candidates.len();
            }
        }

        Ok(summary)
    }
}
