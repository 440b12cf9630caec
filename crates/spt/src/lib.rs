#![warn(missing_docs)]
//! # The *Super-Star* bitmap format
//!
//! This crate is an implementation of the monochrome bitmap format (`*.SPT`)
//! that was used by the graphics module of the DOS word processor *WPS*
//! (Kingsoft). Files start with the text `Super-Star File.`, which is where
//! the name comes from.
//!
//! At the moment, only reading the files is supported.
//!
//! ```
//! # fn main() -> Result<(), spt::DecodeError> {
//! let mut file = vec![0u8; 64];
//! file[34] = 8; // width
//! file[36] = 1; // height
//! file.push(0b1010_1010);
//!
//! let pixels = spt::decode(&file[..])?;
//! assert_eq!(pixels.width(), 8);
//! assert_eq!(pixels.get(0, 0), Some(spt::Pixel::White));
//! assert_eq!(pixels.get(1, 0), Some(spt::Pixel::Black));
//! # Ok(())
//! # }
//! ```

pub mod decoder;
pub mod error;
pub mod header;
pub mod images;
pub mod raster;
pub mod util;

pub use decoder::{decode, DecodeOptions, Decoded, Decoder};
pub use error::{DecodeError, DecodeWarning};
pub use header::{Header, HeaderFlags, HeaderPolicy};
pub use raster::{Pixel, PixelBuffer};

#[doc(hidden)]
pub use nom;
