//! Shared fixtures for checker integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use hires_catalog::{CatalogError, CatalogProvider, Result};
use hires_core::TrackMetadata;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub const FIXTURE_MD5: [u8; 16] = [
    0x9e, 0x10, 0x7d, 0x9d, 0x37, 0x2b, 0xb6, 0x82, 0x6b, 0xd8, 0x1d, 0x35, 0x42, 0xa4, 0x19, 0xd6,
];

/// Write a minimal tagged FLAC file under `dir`
pub fn write_flac(
    dir: &Path,
    name: &str,
    comments: &[&str],
    sample_rate: u32,
    bits_per_sample: u8,
) -> PathBuf {
    let mut stream_info = Vec::with_capacity(34);
    stream_info.extend_from_slice(&[0x10, 0x00, 0x10, 0x00, 0, 0, 0, 0, 0, 0]);
    let packed = (u64::from(sample_rate) << 44)
        | (1u64 << 41)
        | (u64::from(bits_per_sample - 1) << 36)
        | 441_000;
    stream_info.extend_from_slice(&packed.to_be_bytes());
    stream_info.extend_from_slice(&FIXTURE_MD5);

    let mut vorbis = Vec::new();
    vorbis.extend_from_slice(&0u32.to_le_bytes());
    vorbis.extend_from_slice(&(comments.len() as u32).to_le_bytes());
    for comment in comments {
        vorbis.extend_from_slice(&(comment.len() as u32).to_le_bytes());
        vorbis.extend_from_slice(comment.as_bytes());
    }

    let mut bytes = b"fLaC".to_vec();
    bytes.push(0x00);
    bytes.extend_from_slice(&(stream_info.len() as u32).to_be_bytes()[1..]);
    bytes.extend_from_slice(&stream_info);
    bytes.push(0x84);
    bytes.extend_from_slice(&(vorbis.len() as u32).to_be_bytes()[1..]);
    bytes.extend_from_slice(&vorbis);

    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create fixture directory");
    }
    fs::write(&path, bytes).expect("Failed to write FLAC fixture");
    path
}

/// Write a FLAC file tagged with title/artist/album
pub fn write_track(dir: &Path, name: &str, title: &str, sample_rate: u32, bits: u8) -> PathBuf {
    let title = format!("TITLE={title}");
    write_flac(
        dir,
        name,
        &[title.as_str(), "ARTIST=Band", "ALBUM=Album"],
        sample_rate,
        bits,
    )
}

/// In-memory catalog keyed by track title
///
/// Titles without an entry have no upgrades. Every search is recorded.
#[derive(Default)]
pub struct FakeProvider {
    upgrades: HashMap<String, Vec<TrackMetadata>>,
    failing_title: Option<String>,
    searched: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_upgrades(mut self, title: &str, candidates: Vec<TrackMetadata>) -> Self {
        self.upgrades.insert(title.to_string(), candidates);
        self
    }

    pub fn failing_on(mut self, title: &str) -> Self {
        self.failing_title = Some(title.to_string());
        self
    }

    pub fn searched(&self) -> Vec<String> {
        self.searched.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogProvider for FakeProvider {
    fn name(&self) -> &str {
        "fake"
    }

    async fn search(&self, local: &TrackMetadata) -> Result<Vec<TrackMetadata>> {
        self.searched.lock().unwrap().push(local.title.clone());

        if self.failing_title.as_deref() == Some(local.title.as_str()) {
            return Err(CatalogError::MissingData {
                url: "fake://search".to_string(),
                body: "{}".to_string(),
            });
        }

        Ok(self.upgrades.get(&local.title).cloned().unwrap_or_default())
    }
}

/// Remote candidate with the given quality
pub fn candidate(page: &str, bit_depth: u32, sample_rate: u32) -> TrackMetadata {
    TrackMetadata {
        title: "Song".into(),
        artist: "Band".into(),
        album: "Album".into(),
        bit_depth,
        sample_rate,
        ..TrackMetadata::new(page)
    }
}
