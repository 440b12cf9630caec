//! # Reading whole files

use std::{
    fs::File,
    io::{self, BufReader, Read},
    path::Path,
};

use log::{debug, warn};

use crate::{
    error::DecodeWarning,
    header::{read_header, Header, HeaderPolicy},
    images::{decode_rle, unpack_raw},
    raster::PixelBuffer,
    DecodeError,
};

/// Declared sizes above this many pixels are logged as a warning.
///
/// Compressed images are allocated at their declared size up front, at one
/// bit per pixel; a 64-byte file can ask for 65535 × 65535.
pub const LARGE_IMAGE_PIXELS: u64 = 1 << 28;

/// Settings for a [`Decoder`]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// How to deal with a header that is cut off
    pub header: HeaderPolicy,
}

/// The result of decoding a file
#[derive(Debug)]
pub struct Decoded {
    /// The file header
    pub header: Header,
    /// The pixel data
    pub pixels: PixelBuffer,
    /// Problems that were tolerated
    pub warnings: Vec<DecodeWarning>,
}

/// Decoder for SPT files
#[derive(Debug, Default, Clone)]
pub struct Decoder {
    options: DecodeOptions,
}

impl Decoder {
    /// Create a new decoder
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// The options used by this decoder
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode a file from a stream
    pub fn decode<R: Read>(&self, mut reader: R) -> Result<Decoded, DecodeError> {
        let (header, warning) = read_header(&mut reader, self.options.header)?;
        debug!(
            "Image size {}x{}, compressed: {}",
            header.width,
            header.height,
            header.is_compressed()
        );
        if is_large(&header) {
            warn!(
                "Image declares {}x{} pixels, decoding may need a lot of memory",
                header.width, header.height
            );
        }

        let pixels = if header.is_compressed() {
            decode_rle(&mut reader, header.width, header.height)?
        } else {
            unpack_raw(&mut reader, header.width)?
        };
        debug!("Decoded {}x{} pixels", pixels.width(), pixels.height());

        Ok(Decoded {
            header,
            pixels,
            warnings: warning.into_iter().collect(),
        })
    }

    /// Open and decode the file at `path`
    pub fn decode_file(&self, path: &Path) -> Result<Decoded, DecodeError> {
        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DecodeError::SourceNotFound(path.to_owned()),
            _ => DecodeError::Io(e),
        })?;
        // the file is closed when the reader is dropped, on every path
        self.decode(BufReader::new(file))
    }
}

fn is_large(header: &Header) -> bool {
    header.pixel_count() > LARGE_IMAGE_PIXELS
}

/// Decode the pixels of a file from a stream, with default options
pub fn decode<R: Read>(reader: R) -> Result<PixelBuffer, DecodeError> {
    Decoder::default().decode(reader).map(|decoded| decoded.pixels)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{decode, is_large, DecodeOptions, Decoder};
    use crate::{
        header::{parse_header, HEADER_LEN},
        DecodeError, DecodeWarning, HeaderPolicy, Pixel,
    };

    fn file(width: u16, height: u16, flags: u8, data: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; HEADER_LEN];
        out[34..36].copy_from_slice(&width.to_le_bytes());
        out[36..38].copy_from_slice(&height.to_le_bytes());
        out[39] = flags;
        out.extend_from_slice(data);
        out
    }

    #[test]
    fn test_dispatch() {
        // the same bytes mean different things in the two encodings
        let data = [0x00, 0xF0, 0x0F];
        let raw = decode(&file(8, 1, 0x00, &data)[..]).unwrap();
        assert_eq!(raw.height(), 3);
        assert_eq!(raw.row(1), Some(&[0xF0][..]));

        let rle = decode(&file(8, 1, 0x80, &data)[..]).unwrap();
        assert_eq!(rle.height(), 1);
        assert_eq!(rle.row(0), Some(&[0xF0][..]));
    }

    #[test]
    fn test_decode_example() {
        let pixels = decode(&file(8, 1, 0x00, &[0b1010_1010])[..]).unwrap();
        assert_eq!((pixels.width(), pixels.height()), (8, 1));
        for x in 0..8 {
            let expected = if x % 2 == 0 {
                Pixel::White
            } else {
                Pixel::Black
            };
            assert_eq!(pixels.get(x, 0), Some(expected));
        }
    }

    #[test]
    fn test_short_header_policy() {
        let input = [0u8; 20];

        let decoded = Decoder::default().decode(&input[..]).unwrap();
        assert_eq!(decoded.warnings, vec![DecodeWarning::HeaderTooShort(20)]);
        assert!(decoded.pixels.is_empty());

        let strict = Decoder::new(DecodeOptions {
            header: HeaderPolicy::Abort,
        });
        match strict.decode(&input[..]) {
            Err(DecodeError::HeaderTooShort(20)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_large_image() {
        let (_, header) = parse_header(&file(0xFFFF, 0xFFFF, 0x80, &[])).unwrap();
        assert!(is_large(&header));
        let (_, header) = parse_header(&file(640, 480, 0x80, &[])).unwrap();
        assert!(!is_large(&header));
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("this/file/does/not/exist.spt");
        match Decoder::default().decode_file(path) {
            Err(e @ DecodeError::SourceNotFound(_)) => assert!(e.is_not_found()),
            other => panic!("unexpected {:?}", other),
        }
    }
}
