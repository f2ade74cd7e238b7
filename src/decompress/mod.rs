//! Decompression of Jam byte-code Boolean array data.
//!
//! Compressed arrays in a Jam STAPL byte-code (`.jbc`) file are packed with a
//! small LZ77-style scheme. The stream is a little-endian length header
//! followed by a bit-packed sequence of literal and match tokens.
//!
//! ## Wire Format
//!
//! All fields are read least-significant bit first within each byte.
//!
//! ```text
//! [header]  L : 4 (or 8) bytes, little-endian, read as 8-bit fields
//! [body]    repeat until pos == L:
//!             flag:1
//!             flag == 0: literal:8      (1..=3 times, bounded by L - pos)
//!             flag == 1: offset:W length:8
//!                        W = bits_required(min(pos, window))
//! ```
//!
//! The width `W` of the match offset is never stored. Both sides derive it
//! from the number of bytes produced so far, so the encoder and decoder must
//! share [`offset_width`] exactly.
//!
//! | Version | Match window | Offset width plateau |
//! |---------|--------------|----------------------|
//! | 0       | 8192         | 14 bits              |
//! | 1       | 8191         | 13 bits              |
//!
//! ## Example
//!
//! ```rust
//! use jbc_decompress::{decompress, DecodeOptions};
//!
//! // L = 5, then literal "ABC", then literal "DE"
//! let stream = [
//!     0x05, 0x00, 0x00, 0x00, 0x82, 0x84, 0x86, 0x10, 0x15, 0x01,
//! ];
//! let mut out = [0u8; 8];
//! let n = decompress(&stream, &mut out, &DecodeOptions::default()).unwrap();
//! assert_eq!(&out[..n], b"ABCDE");
//! assert_eq!(&out[n..], &[0, 0, 0]);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Compressed Data
//!       ↓
//! ┌─────────────┐
//! │ BitReader   │ ← LSB-first bit cursor, bounds checked
//! └─────────────┘
//!       ↓
//! ┌─────────────┐
//! │ JbcDecoder  │ ← header + literal/match token loop
//! └─────────────┘      (offset width from `width::offset_width`)
//!       ↓
//! ┌─────────────┐
//! │ OutputWindow│ ← literal writes, validated overlapping copies
//! └─────────────┘
//!       ↓
//! Caller's output buffer
//! ```

mod bit_reader;
mod decoder;
mod lzss;
pub mod width;

#[cfg(feature = "parallel")]
mod batch;


pub use bit_reader::BitReader;
pub use decoder::JbcDecoder;
pub use lzss::OutputWindow;
pub use width::{bits_required, match_window_size, offset_width};

#[cfg(feature = "parallel")]
pub use batch::decompress_batch;

use std::fmt;

/// Number of literal bytes carried by one literal token.
pub const LITERAL_RUN: usize = 3;

/// Decompression errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecompressError {
    /// The bit cursor ran out of input before a field was fully read.
    TruncatedInput {
        /// Bit offset into the stream at which the read failed.
        bit_position: u64,
    },
    /// The declared uncompressed length does not fit the output buffer.
    CapacityExceeded {
        /// Length from the stream header.
        declared: u64,
        /// Bytes available in the output buffer.
        capacity: usize,
    },
    /// A match token pointed before the start of the output.
    InvalidBackReference {
        /// Offset read from the match token.
        offset: u32,
        /// Output position at which the match was decoded.
        position: usize,
    },
    /// The format version is not one this decoder knows about.
    FormatVersionUnsupported(u32),
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TruncatedInput { bit_position } => {
                write!(f, "Compressed data truncated at bit {}", bit_position)
            }
            Self::CapacityExceeded { declared, capacity } => write!(
                f,
                "Declared length {} exceeds output capacity {}",
                declared, capacity
            ),
            Self::InvalidBackReference { offset, position } => write!(
                f,
                "Invalid back reference: offset {} at output position {}",
                offset, position
            ),
            Self::FormatVersionUnsupported(v) => {
                write!(f, "Unsupported compression format version: {}", v)
            }
        }
    }
}

impl std::error::Error for DecompressError {}

/// Result alias for decompression operations.
pub type Result<T> = std::result::Result<T, DecompressError>;

/// Compression format version, taken from the byte-code file signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum FormatVersion {
    /// Jam byte-code version 0 (8192-byte match window).
    #[default]
    V0 = 0,
    /// Jam byte-code version 1 (8191-byte match window).
    V1 = 1,
}

impl FormatVersion {
    /// Raw version number as stored in the file signature.
    pub fn as_u32(self) -> u32 {
        self as u32
    }
}

impl TryFrom<u32> for FormatVersion {
    type Error = DecompressError;

    fn try_from(v: u32) -> Result<Self> {
        match v {
            0 => Ok(Self::V0),
            1 => Ok(Self::V1),
            _ => Err(DecompressError::FormatVersionUnsupported(v)),
        }
    }
}

/// Byte width of the uncompressed-length header.
///
/// The reference player read `sizeof(unsigned long)` bytes, so the width
/// depended on the machine that wrote the file. Four bytes is what 32-bit
/// and Windows tools produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HeaderWidth {
    /// 32-bit length header.
    #[default]
    Four,
    /// 64-bit length header (LP64 tools).
    Eight,
}

impl HeaderWidth {
    /// Number of bytes occupied by the header.
    pub fn bytes(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Eight => 8,
        }
    }
}

/// What to do when the header declares more bytes than the output can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OversizePolicy {
    /// Fail with [`DecompressError::CapacityExceeded`].
    #[default]
    Error,
    /// Report a recovered length of 0 and leave the output zeroed, as the
    /// reference player does.
    ReturnZero,
}

/// Options for decoding a compressed stream.
///
/// ```rust
/// use jbc_decompress::{DecodeOptions, FormatVersion, HeaderWidth};
///
/// let opts = DecodeOptions {
///     version: FormatVersion::V1,
///     header_width: HeaderWidth::Eight,
///     ..Default::default()
/// };
/// assert_eq!(opts.max_output_len, DecodeOptions::DEFAULT_MAX_OUTPUT_LEN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Format version, selects the match window size.
    pub version: FormatVersion,
    /// Width of the length header.
    pub header_width: HeaderWidth,
    /// Handling of a declared length larger than the output.
    pub oversize_policy: OversizePolicy,
    /// Upper bound on the allocation made by [`decompress_to_vec`].
    pub max_output_len: usize,
}

impl DecodeOptions {
    /// Default cap for [`decompress_to_vec`] (16 MiB).
    pub const DEFAULT_MAX_OUTPUT_LEN: usize = 16 * 1024 * 1024;

    /// Options for a given format version, everything else default.
    pub fn for_version(version: FormatVersion) -> Self {
        Self {
            version,
            ..Self::default()
        }
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            version: FormatVersion::V0,
            header_width: HeaderWidth::Four,
            oversize_policy: OversizePolicy::Error,
            max_output_len: Self::DEFAULT_MAX_OUTPUT_LEN,
        }
    }
}

/// Decompress `input` into the caller's `output` buffer.
///
/// The whole of `output` is zeroed first. On success the first `n` bytes
/// hold the payload and the rest stay zero.
pub fn decompress(input: &[u8], output: &mut [u8], options: &DecodeOptions) -> Result<usize> {
    JbcDecoder::with_options(*options).decompress(input, output)
}

/// Decompress `input` into a newly allocated buffer of exactly the declared
/// length.
pub fn decompress_to_vec(input: &[u8], options: &DecodeOptions) -> Result<Vec<u8>> {
    JbcDecoder::with_options(*options).decompress_to_vec(input)
}

/// Read only the uncompressed-length header of a stream.
pub fn read_header(input: &[u8], width: HeaderWidth) -> Result<u64> {
    let mut reader = BitReader::new(input);
    decoder::read_length(&mut reader, width)
}
