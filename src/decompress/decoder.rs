//! Jam byte-code stream decoder.
//!
//! Parses the length header, then runs the literal/match token loop until
//! the declared number of bytes has been produced.

use log::{debug, trace, warn};

use super::{
    bit_reader::BitReader,
    lzss::OutputWindow,
    width::offset_width,
    DecodeOptions, DecompressError, HeaderWidth, OversizePolicy, Result, LITERAL_RUN,
};

/// Width of a literal byte and of the match length field.
const CHAR_BITS: u32 = 8;

/// Decoder for compressed Boolean array data.
///
/// Holds only configuration; all cursor and output state lives in the
/// call, so one decoder can be shared between threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JbcDecoder {
    options: DecodeOptions,
}

impl JbcDecoder {
    /// Create a decoder with default options (version 0, 4-byte header).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decoder with the given options.
    pub fn with_options(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// The options this decoder was built with.
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decompress `input` into `output`.
    ///
    /// All of `output` is zeroed before decoding. Returns the number of
    /// bytes recovered, which equals the header's declared length.
    pub fn decompress(&self, input: &[u8], output: &mut [u8]) -> Result<usize> {
        output.fill(0);

        let mut reader = BitReader::new(input);
        let declared = read_length(&mut reader, self.options.header_width)?;

        let Some(length) = self.check_capacity(declared, output.len())? else {
            return Ok(0);
        };

        debug!(
            "decompressing {} bytes from {} byte stream (version {})",
            length,
            input.len(),
            self.options.version.as_u32()
        );

        let mut window = OutputWindow::new(output, length);
        self.decode_tokens(&mut reader, &mut window)?;

        debug!(
            "decompressed {} bytes, consumed {} bits",
            window.position(),
            reader.bit_position()
        );
        Ok(window.position())
    }

    /// Decompress `input` into a new buffer of exactly the declared length.
    ///
    /// The allocation is bounded by `max_output_len`.
    pub fn decompress_to_vec(&self, input: &[u8]) -> Result<Vec<u8>> {
        let declared = read_length(&mut BitReader::new(input), self.options.header_width)?;
        let capacity = self.options.max_output_len;

        let size = match self.check_capacity(declared, capacity)? {
            Some(size) => size,
            None => return Ok(Vec::new()),
        };

        let mut output = vec![0u8; size];
        let recovered = self.decompress(input, &mut output)?;
        debug_assert_eq!(recovered, size);
        Ok(output)
    }

    /// Apply the oversize policy. `None` means "report zero bytes".
    fn check_capacity(&self, declared: u64, capacity: usize) -> Result<Option<usize>> {
        match usize::try_from(declared) {
            Ok(length) if length <= capacity => Ok(Some(length)),
            _ => match self.options.oversize_policy {
                OversizePolicy::Error => Err(DecompressError::CapacityExceeded {
                    declared,
                    capacity,
                }),
                OversizePolicy::ReturnZero => {
                    warn!(
                        "declared length {} exceeds capacity {}, returning empty output",
                        declared, capacity
                    );
                    Ok(None)
                }
            },
        }
    }

    fn decode_tokens(&self, reader: &mut BitReader<'_>, window: &mut OutputWindow<'_>) -> Result<()> {
        let version = self.options.version;

        while !window.is_full() {
            if reader.read_bit()? {
                let pos = window.position();
                let offset = reader.read_bits(offset_width(pos, version))?;
                let length = reader.read_bits(CHAR_BITS)?;
                window.copy_match(offset, length)?;
            } else {
                let run = LITERAL_RUN.min(window.remaining());
                for _ in 0..run {
                    window.write_literal(reader.read_byte()?);
                }
            }
        }

        Ok(())
    }
}

/// Read the uncompressed length, one 8-bit field per byte, least
/// significant byte first.
pub(super) fn read_length(reader: &mut BitReader<'_>, width: HeaderWidth) -> Result<u64> {
    let mut length = 0u64;
    for i in 0..width.bytes() {
        length |= u64::from(reader.read_bits(CHAR_BITS)?) << (i as u32 * CHAR_BITS);
    }
    trace!("length header: {}", length);
    Ok(length)
}
