//! # Run-length encoded pixel data
//!
//! The data is a sequence of blocks, each starting with a control byte `c`:
//!
//! - `c < 0x80`: a literal run of `c + 1` data bytes
//! - `c >= 0x80`: a single data byte, repeated `(256 - c) + 1` times
//!
//! Every data byte stands for 8 pixels, most significant bit first. The
//! pixels are written row-major without regard to row boundaries, so a
//! byte may wrap from the end of one row to the start of the next.

use std::io::{Bytes, Read};

use log::{debug, trace};

use crate::{
    raster::{Pixel, PixelBuffer},
    util::bit_iter::ByteBits,
    DecodeError,
};

/// Number of times the data byte of a repeat run is written
pub fn repeat_count(control: u8) -> usize {
    (256 - usize::from(control)) + 1
}

struct RleState<R> {
    bytes: Bytes<R>,
    pixels: PixelBuffer,
    /// Row-major pixel cursor
    pos: u64,
    clipped: u64,
}

impl<R: Read> RleState<R> {
    fn next_control(&mut self) -> Result<Option<u8>, DecodeError> {
        Ok(self.bytes.next().transpose()?)
    }

    fn next_data(&mut self) -> Result<u8, DecodeError> {
        match self.bytes.next() {
            Some(byte) => Ok(byte?),
            None => Err(DecodeError::TruncatedStream { pos: self.pos }),
        }
    }

    fn put(&mut self, pattern: &[Pixel; 8]) {
        for pixel in pattern.iter().copied() {
            if !self.pixels.set_index(self.pos, pixel) {
                self.clipped += 1;
            }
            self.pos += 1;
        }
    }

    fn literal(&mut self, control: u8) -> Result<(), DecodeError> {
        for _ in 0..=control {
            let data = self.next_data()?;
            self.put(&unpack(data));
        }
        Ok(())
    }

    fn repeat(&mut self, control: u8) -> Result<(), DecodeError> {
        let data = self.next_data()?;
        let pattern = unpack(data);
        for _ in 0..repeat_count(control) {
            self.put(&pattern);
        }
        Ok(())
    }
}

fn unpack(data: u8) -> [Pixel; 8] {
    ByteBits::unpack(data).map(Pixel::from_bit)
}

/// Decode the compressed pixel data of a `width` x `height` image.
///
/// Decoding stops at the end of the stream, or as soon as a block has moved
/// the cursor past the last row. Pixels beyond `width * height` are never
/// written.
pub fn decode_rle<R: Read>(
    reader: &mut R,
    width: u16,
    height: u16,
) -> Result<PixelBuffer, DecodeError> {
    let pixels = PixelBuffer::new(u32::from(width), u32::from(height));
    if pixels.is_empty() {
        debug!("Empty image ({}x{}), skipping pixel data", width, height);
        return Ok(pixels);
    }

    let width = u64::from(width);
    let height = u64::from(height);
    let mut state = RleState {
        bytes: reader.bytes(),
        pixels,
        pos: 0,
        clipped: 0,
    };

    while let Some(control) = state.next_control()? {
        if control < 0x80 {
            trace!("literal({}) at {}", usize::from(control) + 1, state.pos);
            state.literal(control)?;
        } else {
            trace!("repeat({}) at {}", repeat_count(control), state.pos);
            state.repeat(control)?;
        }

        if state.pos / width >= height {
            debug!("Pixel cursor left the image at {}, stopping", state.pos);
            break;
        }
    }

    if state.clipped > 0 {
        debug!("Dropped {} pixels past the end of the image", state.clipped);
    }
    Ok(state.pixels)
}
