//! Errors and warnings raised while decoding

use std::{io, path::PathBuf};

use displaydoc::Display;
use thiserror::Error;

/// Error when decoding an SPT file
#[derive(Debug, Display, Error)]
pub enum DecodeError {
    /// File header too short: expected 64 bytes, got {0}
    HeaderTooShort(usize),
    /// Source not found: {0:?}
    SourceNotFound(PathBuf),
    /// Failed IO: {0}
    Io(#[from] io::Error),
    /// Truncated stream: missing data byte at pixel {pos}
    TruncatedStream {
        /// The pixel cursor when the stream ended
        pos: u64,
    },
}

impl DecodeError {
    /// Whether the input file could not be found
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SourceNotFound(_))
    }
}

/// Recoverable condition that did not stop the decoder
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum DecodeWarning {
    /// File header too short: expected 64 bytes, got {0}
    HeaderTooShort(usize),
}
