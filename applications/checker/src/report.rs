//! Per-track result records
//!
//! Tracks without an upgrade go to DEBUG so they only show up in the result
//! log. Tracks with an upgrade go to WARN, followed by one WARN record per
//! candidate, so they also reach the console at its default level.

use hires_core::TrackMetadata;
use tracing::{debug, warn};

/// Emit the result records for one local track
pub fn report(local: &TrackMetadata, candidates: &[TrackMetadata]) {
    if candidates.is_empty() {
        debug!(
            path = %local.file_path,
            title = %local.title,
            artist = %local.artist,
            album = %local.album,
            bit_depth = local.bit_depth,
            sample_rate = local.sample_rate,
            audio_md5 = %local.audio_md5,
            "no hi-res upgrade found"
        );
        return;
    }

    warn!(
        path = %local.file_path,
        title = %local.title,
        artist = %local.artist,
        album = %local.album,
        bit_depth = local.bit_depth,
        sample_rate = local.sample_rate,
        audio_md5 = %local.audio_md5,
        candidates = candidates.len(),
        "hi-res upgrade available"
    );

    for (index, candidate) in candidates.iter().enumerate() {
        warn!(
            candidate = index + 1,
            url = %candidate.file_path,
            title = %candidate.title,
            artist = %candidate.artist,
            album = %candidate.album,
            bit_depth = candidate.bit_depth,
            sample_rate = candidate.sample_rate,
            "upgrade candidate"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogSettings;
    use crate::logging;
    use std::fs::File;

    fn track(path: &str, bit_depth: u32, sample_rate: u32) -> TrackMetadata {
        TrackMetadata {
            title: "Song".into(),
            artist: "Band".into(),
            album: "Album".into(),
            bit_depth,
            sample_rate,
            ..TrackMetadata::new(path)
        }
    }

    fn capture(file_level: &str, emit: impl FnOnce()) -> String {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.log");
        let settings = LogSettings {
            file: path.clone(),
            console_level: "off".to_string(),
            file_level: file_level.to_string(),
        };

        let subscriber = logging::subscriber(&settings, File::create(&path).unwrap()).unwrap();
        tracing::subscriber::with_default(subscriber, emit);

        std::fs::read_to_string(&path).unwrap()
    }

    #[test]
    fn no_upgrade_is_debug_only() {
        let local = track("/music/song.flac", 24, 96_000);

        let at_debug = capture("debug", || report(&local, &[]));
        assert!(at_debug.contains("DEBUG"));
        assert!(at_debug.contains("no hi-res upgrade found"));
        assert!(at_debug.contains("/music/song.flac"));

        let at_warn = capture("warn", || report(&local, &[]));
        assert!(at_warn.is_empty());
    }

    #[test]
    fn upgrade_lists_every_candidate_at_warn() {
        let local = track("/music/song.flac", 16, 44_100);
        let candidates = vec![
            track("https://mora.jp/package/1/A/", 24, 96_000),
            track("https://mora.jp/package/1/B/", 24, 192_000),
        ];

        let log = capture("warn", || report(&local, &candidates));

        assert!(log.contains("hi-res upgrade available"));
        assert!(log.contains("candidates=2"));
        assert_eq!(log.matches("upgrade candidate").count(), 2);
        assert!(log.contains("https://mora.jp/package/1/A/"));
        assert!(log.contains("sample_rate=192000"));
        assert!(!log.contains("DEBUG"));
    }
}
