/// Library scanner implementation
use crate::error::ScanError;
use crate::registry::{ParseOutcome, ParserRegistry};
use hires_core::TrackMetadata;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Walks a directory tree and parses every supported file
///
/// The scan is all-or-nothing: the first walk error or parse failure aborts
/// it. Files no parser claims are skipped.
pub struct LibraryScanner {
    registry: ParserRegistry,

    /// Whether to follow symbolic links
    follow_links: bool,
}

impl LibraryScanner {
    /// Create a scanner over the given registry
    pub fn new(registry: ParserRegistry) -> Self {
        Self {
            registry,
            follow_links: false,
        }
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Registry used for dispatch
    pub fn registry(&self) -> &ParserRegistry {
        &self.registry
    }

    /// Scan `root` recursively, in file-name order
    ///
    /// # Returns
    ///
    /// Metadata of every supported file, in walk order
    pub fn scan(&self, root: &Path) -> Result<Vec<TrackMetadata>, ScanError> {
        if !root.exists() {
            return Err(ScanError::RootNotFound(root.display().to_string()));
        }

        let mut tracks = Vec::new();
        let mut skipped = 0usize;

        for entry in WalkDir::new(root)
            .follow_links(self.follow_links)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            match self.registry.parse_file(path) {
                ParseOutcome::Skipped => {
                    debug!(path = %path.display(), "Unsupported path, skipping");
                    skipped += 1;
                }
                ParseOutcome::Parsed(track) => {
                    debug!(
                        path = %path.display(),
                        bit_depth = track.bit_depth,
                        sample_rate = track.sample_rate,
                        "Parsed track metadata"
                    );
                    tracks.push(track);
                }
                ParseOutcome::Failed(failure) => return Err(failure.into()),
            }
        }

        info!(
            root = %root.display(),
            tracks = tracks.len(),
            skipped,
            "Library scan complete"
        );

        Ok(tracks)
    }
}
