//! # Bit unpacking
//!
//! SPT stores 8 pixels per byte, most significant bit first.

/// Iterator over the bits in a byte, MSB first
#[derive(Debug, Clone)]
pub struct ByteBits {
    remaining: u8,
    bits: u8,
}

impl ByteBits {
    /// Iterate over the bits of `bits`
    pub fn new(bits: u8) -> Self {
        Self { remaining: 8, bits }
    }

    /// Unpack all eight bits at once
    pub fn unpack(bits: u8) -> [bool; 8] {
        let mut out = [false; 8];
        for (slot, bit) in out.iter_mut().zip(Self::new(bits)) {
            *slot = bit;
        }
        out
    }
}

impl Iterator for ByteBits {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let bit = self.bits & 0x80 != 0;
        self.bits <<= 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining.into();
        (remaining, Some(remaining))
    }
}

/// The pixel bits of a packed row, left to right
pub fn row_bits(row: &[u8]) -> impl Iterator<Item = bool> + '_ {
    row.iter().copied().flat_map(ByteBits::new)
}
