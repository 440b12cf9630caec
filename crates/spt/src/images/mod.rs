//! # Pixel data encodings
//!
//! The pixel data follows the header directly. Bit 7 of header byte 39
//! selects one of two encodings.

pub mod raw;
pub mod rle;

pub use raw::unpack_raw;
pub use rle::decode_rle;
