//! Bit reader for compressed data streams.
//!
//! Reads bits from a byte stream, LSB first. A field that spans a byte
//! boundary takes its low bits from the earlier byte.

use super::{DecompressError, Result};

const BYTE_BITS: u32 = 8;

/// Bit cursor over a borrowed byte slice.
///
/// Every decode call builds its own reader, so independent streams can be
/// decoded concurrently.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Index of the byte currently being consumed
    byte_index: usize,
    /// Unread bits left in `data[byte_index]`, always 1..=8
    bits_avail: u32,
}

impl<'a> BitReader<'a> {
    /// Create a new bit reader positioned at the first bit of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            byte_index: 0,
            bits_avail: BYTE_BITS,
        }
    }

    /// Read `n` bits (1..=16) and advance the position.
    ///
    /// Fails with [`DecompressError::TruncatedInput`] if the stream ends
    /// before all `n` bits are available. The position is left where the
    /// failure happened.
    #[inline]
    pub fn read_bits(&mut self, n: u32) -> Result<u32> {
        debug_assert!((1..=16).contains(&n));

        let mut result = 0u32;
        let mut shift = 0;
        let mut remaining = n;

        while remaining > 0 {
            let byte = match self.data.get(self.byte_index) {
                Some(&b) => u32::from(b),
                None => {
                    return Err(DecompressError::TruncatedInput {
                        bit_position: self.bit_position(),
                    })
                }
            };

            let consumed = BYTE_BITS - self.bits_avail;
            let take = remaining.min(self.bits_avail);
            let bits = (byte >> consumed) & ((1 << take) - 1);
            result |= bits << shift;

            shift += take;
            remaining -= take;
            self.bits_avail -= take;

            if self.bits_avail == 0 {
                self.byte_index += 1;
                self.bits_avail = BYTE_BITS;
            }
        }

        Ok(result)
    }

    /// Read a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Read a single byte (8 bits), not necessarily byte aligned.
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bits(BYTE_BITS)? as u8)
    }

    /// Get the current bit position.
    pub fn bit_position(&self) -> u64 {
        self.byte_index as u64 * u64::from(BYTE_BITS) + u64::from(BYTE_BITS - self.bits_avail)
    }

    /// Get the index of the byte currently being read.
    pub fn byte_position(&self) -> usize {
        self.byte_index
    }

    /// Remaining bits available.
    pub fn remaining_bits(&self) -> u64 {
        let total = self.data.len() as u64 * u64::from(BYTE_BITS);
        total.saturating_sub(self.bit_position())
    }

    /// Check if every bit has been consumed.
    pub fn is_eof(&self) -> bool {
        self.byte_index >= self.data.len()
    }
}
