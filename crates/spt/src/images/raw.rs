//! # Uncompressed pixel data
//!
//! Every row is stored as `(width + 7) / 8` bytes, 8 pixels per byte with
//! the most significant bit first. There is no row count: the image has as
//! many rows as the stream has complete row groups, whatever the header says.

use std::io::Read;

use log::{debug, warn};

use crate::{raster::PixelBuffer, util::read_up_to, DecodeError};

/// Unpack bit-packed rows until the stream ends.
///
/// A row that is cut off by the end of the stream is dropped.
pub fn unpack_raw<R: Read>(reader: &mut R, width: u16) -> Result<PixelBuffer, DecodeError> {
    let mut pixels = PixelBuffer::new(u32::from(width), 0);
    let bytes_per_line = pixels.bytes_per_line();
    if bytes_per_line == 0 {
        warn!("Image has zero width, skipping pixel data");
        return Ok(pixels);
    }

    let mut line = vec![0u8; bytes_per_line];
    loop {
        let len = read_up_to(reader, &mut line)?;
        if len < bytes_per_line {
            if len > 0 {
                debug!(
                    "Dropping incomplete row {} ({} of {} bytes)",
                    pixels.height(),
                    len,
                    bytes_per_line
                );
            }
            break;
        }
        if pixels.height() == u32::MAX {
            warn!("Row limit reached, ignoring remaining pixel data");
            break;
        }
        pixels.push_row(&line);
    }
    Ok(pixels)
}
