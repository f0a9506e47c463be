//! Byte-level FLAC fixtures for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

/// MD5 written into every fixture's STREAMINFO
pub const FIXTURE_MD5: [u8; 16] = [
    0x9e, 0x10, 0x7d, 0x9d, 0x37, 0x2b, 0xb6, 0x82, 0x6b, 0xd8, 0x1d, 0x35, 0x42, 0xa4, 0x19, 0xd6,
];

/// Lowercase hex of [`FIXTURE_MD5`]
pub const FIXTURE_MD5_HEX: &str = "9e107d9d372bb6826bd81d3542a419d6";

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Builds a FLAC metadata section block by block
pub struct FlacBuilder {
    blocks: Vec<(u8, Vec<u8>)>,
}

impl FlacBuilder {
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// STREAMINFO with the given rate/depth, stereo, fixed MD5
    pub fn stream_info(self, sample_rate: u32, bits_per_sample: u8) -> Self {
        let mut data = Vec::with_capacity(34);
        data.extend_from_slice(&4096u16.to_be_bytes());
        data.extend_from_slice(&4096u16.to_be_bytes());
        data.extend_from_slice(&[0, 0, 0]);
        data.extend_from_slice(&[0, 0, 0]);
        let packed = (u64::from(sample_rate) << 44)
            | (1u64 << 41)
            | (u64::from(bits_per_sample - 1) << 36)
            | 441_000;
        data.extend_from_slice(&packed.to_be_bytes());
        data.extend_from_slice(&FIXTURE_MD5);
        self.raw_block(0, data)
    }

    /// VORBIS_COMMENT with `KEY=value` entries
    pub fn comments(self, comments: &[&str]) -> Self {
        let raw: Vec<&[u8]> = comments.iter().map(|c| c.as_bytes()).collect();
        self.comments_raw(&raw)
    }

    /// VORBIS_COMMENT with entries written byte for byte, valid UTF-8 or not
    pub fn comments_raw(self, comments: &[&[u8]]) -> Self {
        let vendor = "hires-checker test";
        let mut data = Vec::new();
        data.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
        data.extend_from_slice(vendor.as_bytes());
        data.extend_from_slice(&(comments.len() as u32).to_le_bytes());
        for comment in comments {
            data.extend_from_slice(&(comment.len() as u32).to_le_bytes());
            data.extend_from_slice(comment);
        }
        self.raw_block(4, data)
    }

    pub fn padding(self, len: usize) -> Self {
        self.raw_block(1, vec![0u8; len])
    }

    pub fn raw_block(mut self, block_type: u8, data: Vec<u8>) -> Self {
        self.blocks.push((block_type, data));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut bytes = b"fLaC".to_vec();
        let last = self.blocks.len().saturating_sub(1);
        for (index, (block_type, data)) in self.blocks.iter().enumerate() {
            let flag = if index == last { 0x80 } else { 0x00 };
            bytes.push(block_type | flag);
            bytes.extend_from_slice(&(data.len() as u32).to_be_bytes()[1..]);
            bytes.extend_from_slice(data);
        }
        // A few bytes standing in for audio frames
        bytes.extend_from_slice(&[0xFF, 0xF8, 0x69, 0x18, 0x00, 0x00]);
        bytes
    }

    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create fixture directory");
        }
        fs::write(&path, self.build()).expect("Failed to write FLAC fixture");
        path
    }
}

/// Complete, valid track
pub fn tagged_track(title: &str, artist: &str, album: &str) -> FlacBuilder {
    let title = format!("TITLE={title}");
    let artist = format!("ARTIST={artist}");
    let album = format!("ALBUM={album}");
    FlacBuilder::new()
        .stream_info(44_100, 16)
        .comments(&[title.as_str(), artist.as_str(), album.as_str()])
        .padding(16)
}
