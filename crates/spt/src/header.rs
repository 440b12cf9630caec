//! # The 64-byte file header
//!
//! | offset | size | content                                   |
//! |--------|------|-------------------------------------------|
//! | 0      | 16   | `Super-Star File.`                        |
//! | 34     | 2    | width in pixels (little endian)           |
//! | 36     | 2    | height in pixels (little endian)          |
//! | 38     | 1    | `0x01` (uncompressed) or `0x05` (compressed) |
//! | 39     | 1    | flags, `0x80` marks run-length compression |
//!
//! All other bytes are unknown and ignored.

use std::io::Read;

use bitflags::bitflags;
use log::{debug, warn};
use nom::{
    bytes::complete::take,
    number::complete::{be_u8, le_u16},
    IResult,
};

use crate::{
    error::DecodeWarning,
    util::{read_up_to, HexDump},
    DecodeError,
};

/// Size of the file header in bytes
pub const HEADER_LEN: usize = 64;

/// The text at the start of every well-formed file
pub const MAGIC: &[u8; 16] = b"Super-Star File.";

bitflags! {
    /// The flag byte at offset 39
    #[derive(Debug, Copy, Clone, PartialEq, Eq)]
    pub struct HeaderFlags: u8 {
        /// The pixel data is run-length encoded
        const COMPRESSED = 0x80;
    }
}

/// The parsed file header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Bytes 0..16, usually [`MAGIC`]
    pub magic: [u8; 16],
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
    /// Byte 38, not interpreted
    pub kind: u8,
    /// Byte 39
    pub flags: HeaderFlags,
}

impl Header {
    /// Whether the pixel data uses the run-length encoding
    pub fn is_compressed(&self) -> bool {
        self.flags.contains(HeaderFlags::COMPRESSED)
    }

    /// Whether the file starts with the expected text.
    ///
    /// The decoder itself never checks this.
    pub fn has_magic(&self) -> bool {
        &self.magic == MAGIC
    }

    /// The number of pixels in the declared size
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Bytes per row in the uncompressed encoding
    pub fn bytes_per_line(&self) -> usize {
        (usize::from(self.width) + 7) / 8
    }
}

/// What to do when the input ends inside the header
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum HeaderPolicy {
    /// Log a warning and continue as if the missing bytes were zero
    #[default]
    Warn,
    /// Fail with [`DecodeError::HeaderTooShort`]
    Abort,
}

/// Parse the 64 header bytes
pub fn parse_header(input: &[u8]) -> IResult<&[u8], Header> {
    let (input, magic) = take(16usize)(input)?;
    let (input, _) = take(18usize)(input)?;
    let (input, width) = le_u16(input)?;
    let (input, height) = le_u16(input)?;
    let (input, kind) = be_u8(input)?;
    let (input, flags) = be_u8(input)?;
    let (input, _) = take(24usize)(input)?;

    let mut header_magic = [0u8; 16];
    header_magic.copy_from_slice(magic);

    let header = Header {
        magic: header_magic,
        width,
        height,
        kind,
        flags: HeaderFlags::from_bits_retain(flags),
    };
    Ok((input, header))
}

/// Read the header from the start of a stream.
///
/// On success, the reader is positioned at the first byte of pixel data.
pub fn read_header<R: Read>(
    reader: &mut R,
    policy: HeaderPolicy,
) -> Result<(Header, Option<DecodeWarning>), DecodeError> {
    let mut bytes = [0u8; HEADER_LEN];
    let len = read_up_to(reader, &mut bytes)?;

    let warning = if len < HEADER_LEN {
        match policy {
            HeaderPolicy::Abort => return Err(DecodeError::HeaderTooShort(len)),
            HeaderPolicy::Warn => {
                warn!("File header too short ({} of {} bytes)", len, HEADER_LEN);
                Some(DecodeWarning::HeaderTooShort(len))
            }
        }
    } else {
        None
    };

    debug!("Header:\n{:#}", HexDump(&bytes));
    // the buffer is always complete, so this can't fail
    let (_, header) = parse_header(&bytes).map_err(|_| DecodeError::HeaderTooShort(len))?;
    Ok((header, warning))
}
