//! Builders for synthetic SPT files

use std::path::PathBuf;

pub use spt::header::{HEADER_LEN, MAGIC};

/// Byte 38 and 39 of an uncompressed file
pub const RAW: [u8; 2] = [0x01, 0x00];
/// Byte 38 and 39 of a compressed file
pub const COMPRESSED: [u8; 2] = [0x05, 0x80];

/// A 64-byte header with the given fields
pub fn header(width: u16, height: u16, mode: [u8; 2]) -> Vec<u8> {
    let mut out = vec![0u8; HEADER_LEN];
    out[..16].copy_from_slice(MAGIC);
    out[34..36].copy_from_slice(&width.to_le_bytes());
    out[36..38].copy_from_slice(&height.to_le_bytes());
    out[38..40].copy_from_slice(&mode);
    out
}

/// Pack rows of pixels (`true` is white) into the uncompressed encoding
pub fn pack_rows(rows: &[Vec<bool>]) -> Vec<u8> {
    let mut out = Vec::new();
    for row in rows {
        for chunk in row.chunks(8) {
            let mut byte = 0u8;
            for (i, white) in chunk.iter().enumerate() {
                if *white {
                    byte |= 0x80 >> i;
                }
            }
            out.push(byte);
        }
    }
    out
}

/// A deterministic pseudo-random bitmap
pub fn noise(width: usize, height: usize, seed: u32) -> Vec<Vec<bool>> {
    let mut state = seed;
    (0..height)
        .map(|_| {
            (0..width)
                .map(|_| {
                    // Numerical Recipes LCG
                    state = state.wrapping_mul(1664525).wrapping_add(1013904223);
                    state & 0x8000_0000 != 0
                })
                .collect()
        })
        .collect()
}

/// Directory for files created by the tests
pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir()
        .join("spt-tests")
        .join(format!("{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}
