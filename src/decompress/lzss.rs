//! LZSS output window.
//!
//! The whole output is the window: matches may reach back to any byte
//! already written, and nothing is ever written past the declared length.

use super::{DecompressError, Result};

/// Write cursor over the caller's output buffer.
pub struct OutputWindow<'a> {
    /// Caller-owned output
    buf: &'a mut [u8],
    /// Next byte to write
    pos: usize,
    /// Declared uncompressed length, `<= buf.len()`
    limit: usize,
}

impl<'a> OutputWindow<'a> {
    /// Create a window that will fill `buf[..limit]`.
    ///
    /// `limit` is clamped to the buffer length.
    pub fn new(buf: &'a mut [u8], limit: usize) -> Self {
        let limit = limit.min(buf.len());
        Self { buf, pos: 0, limit }
    }

    /// Write a literal byte. Ignored once the window is full.
    #[inline]
    pub fn write_literal(&mut self, byte: u8) {
        if self.pos < self.limit {
            self.buf[self.pos] = byte;
            self.pos += 1;
        }
    }

    /// Copy `length` bytes starting `offset` bytes back from the current
    /// position, stopping early at the limit.
    ///
    /// Overlapping copies (`offset < length`) repeat the bytes just written.
    /// Returns the number of bytes copied.
    #[inline]
    pub fn copy_match(&mut self, offset: u32, length: u32) -> Result<usize> {
        let dist = offset as usize;
        if dist == 0 || dist > self.pos {
            return Err(DecompressError::InvalidBackReference {
                offset,
                position: self.pos,
            });
        }

        let len = (length as usize).min(self.remaining());
        let src = self.pos - dist;

        if dist >= len {
            // Non-overlapping: use copy_within for speed
            self.buf.copy_within(src..src + len, self.pos);
        } else {
            for i in 0..len {
                self.buf[self.pos + i] = self.buf[src + i];
            }
        }

        self.pos += len;
        Ok(len)
    }

    /// Get the current output position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left before the limit.
    pub fn remaining(&self) -> usize {
        self.limit - self.pos
    }

    /// Whether the declared length has been produced.
    pub fn is_full(&self) -> bool {
        self.pos == self.limit
    }

    /// The bytes written so far.
    pub fn written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }
}
