//! # General utilities

use std::{
    fmt,
    io::{self, Read},
};

pub mod bit_iter;

/// Fill `buf` from the reader, returning fewer bytes only at the end of the stream
pub(crate) fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Bytes printed as hex, 16 to a line with offsets in the alternate form
#[derive(Clone, Copy)]
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            for (line, chunk) in self.0.chunks(16).enumerate() {
                if line > 0 {
                    writeln!(f)?;
                }
                write!(f, "{:04X}:", line * 16)?;
                for byte in chunk {
                    write!(f, " {:02X}", byte)?;
                }
            }
            return Ok(());
        }
        for (index, byte) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use super::{read_up_to, HexDump};

    #[test]
    fn hex_dump() {
        assert_eq!(format!("{}", HexDump(b"Su\x00\xFF")), "53 75 00 FF");
        let bytes: Vec<u8> = (0..18).collect();
        assert_eq!(
            format!("{:#}", HexDump(&bytes)),
            "0000: 00 01 02 03 04 05 06 07 08 09 0A 0B 0C 0D 0E 0F\n0010: 10 11"
        );
    }

    /// Hands out one byte per call, after an interruption
    struct Trickle<'a> {
        data: &'a [u8],
        interrupted: bool,
    }

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::ErrorKind::Interrupted.into());
            }
            match self.data.split_first() {
                Some((first, rest)) if !buf.is_empty() => {
                    buf[0] = *first;
                    self.data = rest;
                    Ok(1)
                }
                _ => Ok(0),
            }
        }
    }

    #[test]
    fn read_up_to_fills() {
        let mut reader = Trickle {
            data: &[1, 2, 3],
            interrupted: false,
        };
        let mut buf = [0u8; 4];
        assert_eq!(read_up_to(&mut reader, &mut buf).unwrap(), 3);
        assert_eq!(buf, [1, 2, 3, 0]);
    }
}
