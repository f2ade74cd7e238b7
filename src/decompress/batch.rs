//! Parallel decoding of independent compressed arrays.
//!
//! A byte-code file can carry many compressed arrays. Each one is a
//! self-contained stream, so they can be decoded on separate threads.

use rayon::prelude::*;

use super::{DecodeOptions, JbcDecoder, Result};

/// Decompress every stream in `inputs`, in parallel.
///
/// Results are returned in input order. A failure in one stream does not
/// affect the others.
pub fn decompress_batch<I>(inputs: &[I], options: &DecodeOptions) -> Vec<Result<Vec<u8>>>
where
    I: AsRef<[u8]> + Sync,
{
    let decoder = JbcDecoder::with_options(*options);
    inputs
        .par_iter()
        .map(|input| decoder.decompress_to_vec(input.as_ref()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompress::DecompressError;

    #[test]
    fn test_batch_preserves_order_and_errors() {
        let streams: Vec<Vec<u8>> = vec![
            // "ABCDE"
            vec![0x05, 0, 0, 0, 0x82, 0x84, 0x86, 0x10, 0x15, 0x01],
            // Truncated header
            vec![0x05, 0],
            // Empty payload
            vec![0, 0, 0, 0],
        ];

        let results = decompress_batch(&streams, &DecodeOptions::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_deref(), Ok(&b"ABCDE"[..]));
        assert_eq!(
            results[1],
            Err(DecompressError::TruncatedInput { bit_position: 16 })
        );
        assert_eq!(results[2], Ok(Vec::new()));
    }

    #[test]
    fn test_batch_empty() {
        let streams: [&[u8]; 0] = [];
        assert!(decompress_batch(&streams, &DecodeOptions::default()).is_empty());
    }
}
