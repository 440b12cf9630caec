//! # Decoded bitmaps

use std::io::{self, Write};

use crate::util::bit_iter::row_bits;

/// A single two-tone pixel
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Pixel {
    /// Bit value 0
    Black,
    /// Bit value 1
    White,
}

impl Pixel {
    /// Interpret a bit from the file
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            Self::White
        } else {
            Self::Black
        }
    }

    /// The bit used in the file
    pub fn bit(self) -> bool {
        self == Self::White
    }

    /// Packed 24-bit RGB value
    pub fn rgb(self) -> u32 {
        match self {
            Self::Black => 0x000000,
            Self::White => 0xFFFFFF,
        }
    }

    /// 8-bit gray value
    pub fn luma(self) -> u8 {
        match self {
            Self::Black => 0x00,
            Self::White => 0xFF,
        }
    }
}

/// A row-major grid of two-tone pixels
///
/// Every row uses `(width + 7) / 8` bytes, one bit per pixel with the most
/// significant bit first. A set bit is white, so this is the same layout as
/// in uncompressed files. Bits beyond `width` at the end of a row are
/// always clear.
///
/// The buffer is only ever filled by the decoders in [`crate::images`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    bytes_per_line: usize,
    buffer: Vec<u8>,
}

impl PixelBuffer {
    /// Create an all-black buffer
    pub(crate) fn new(width: u32, height: u32) -> Self {
        let bytes_per_line = bytes_per_line(width);
        Self {
            width,
            height,
            bytes_per_line,
            buffer: vec![0; bytes_per_line * (height as usize)],
        }
    }

    /// The width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The number of rows
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The number of bytes in a packed row
    pub fn bytes_per_line(&self) -> usize {
        self.bytes_per_line
    }

    /// Whether the buffer contains no pixels at all
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the pixel at column `x` in row `y`
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(Pixel::from_bit(self.bit(x, y)))
    }

    fn bit(&self, x: u32, y: u32) -> bool {
        let index = (y as usize) * self.bytes_per_line + (x as usize) / 8;
        let mask = 0x80 >> (x % 8);
        self.buffer[index] & mask != 0
    }

    /// The packed bytes of row `y`
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.bytes_per_line;
        Some(&self.buffer[start..start + self.bytes_per_line])
    }

    /// Iterate over the packed rows
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    /// Iterate over the pixels of row `y`, left to right
    pub fn row_pixels(&self, y: u32) -> impl Iterator<Item = Pixel> + '_ {
        let row = self.row(y).unwrap_or(&[]);
        row_bits(row)
            .take(self.width as usize)
            .map(Pixel::from_bit)
    }

    /// Iterate over all pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        (0..self.height).flat_map(move |y| self.row_pixels(y))
    }

    /// Append a packed row, dropping the bits beyond `width`
    pub(crate) fn push_row(&mut self, bytes: &[u8]) {
        debug_assert_eq!(bytes.len(), self.bytes_per_line);
        self.buffer.extend_from_slice(bytes);
        if let Some(last) = self.buffer.last_mut() {
            *last &= padding_mask(self.width);
        }
        self.height += 1;
    }

    /// Set the pixel at the row-major index `pos`.
    ///
    /// Returns `false` and leaves the buffer untouched if `pos` is past the end.
    pub(crate) fn set_index(&mut self, pos: u64, pixel: Pixel) -> bool {
        let width = u64::from(self.width);
        if width == 0 || pos >= width * u64::from(self.height) {
            return false;
        }
        let x = (pos % width) as usize;
        let y = (pos / width) as usize;
        let index = y * self.bytes_per_line + x / 8;
        let mask = 0x80 >> (x % 8);
        match pixel {
            Pixel::White => self.buffer[index] |= mask,
            Pixel::Black => self.buffer[index] &= !mask,
        }
        true
    }

    #[cfg(feature = "image")]
    #[cfg_attr(docsrs, doc(cfg(feature = "image")))]
    /// Turn the buffer into a `GrayImage` from the `image` crate
    pub fn to_image(&self) -> image::GrayImage {
        image::GrayImage::from_fn(self.width, self.height, |x, y| {
            image::Luma([Pixel::from_bit(self.bit(x, y)).luma()])
        })
    }

    /// Write the buffer as a binary Portable Bitmap (`P4`)
    ///
    /// Note: PBM uses 1 for black, so all bits are inverted.
    pub fn write_pbm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "P4\n{} {}\n", self.width, self.height)?;
        let mask = padding_mask(self.width);
        let mut line = vec![0u8; self.bytes_per_line];
        for row in self.rows() {
            for (dest, byte) in line.iter_mut().zip(row) {
                *dest = !byte;
            }
            if let Some(last) = line.last_mut() {
                *last &= mask;
            }
            out.write_all(&line)?;
        }
        Ok(())
    }
}

fn bytes_per_line(width: u32) -> usize {
    (width as usize + 7) / 8
}

/// Mask for the bits of the last byte in a row that are within `width`
fn padding_mask(width: u32) -> u8 {
    match width % 8 {
        0 => 0xFF,
        rem => 0xFF << (8 - rem),
    }
}
