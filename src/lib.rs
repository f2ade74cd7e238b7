//! Decompressor for Jam STAPL byte-code Boolean array data.
//!
//! JTAG programming files in the Jam byte-code (`.jbc`) format store device
//! configuration bitstreams and vector data as compressed Boolean arrays.
//! This crate reconstructs those arrays bit-exactly; the byte-code
//! interpreter and JTAG transport that consume them live elsewhere.
//!
//! ## Features
//! - Core library depends only on the `log` facade
//! - `parallel` - Decode many independent arrays on a rayon thread pool
//!
//! ## Example
//!
//! ```rust
//! use jbc_decompress::{decompress_to_vec, DecodeOptions, FormatVersion};
//!
//! let stream = [0x03, 0x00, 0x00, 0x00, 0x82, 0x84, 0x86, 0x00];
//! let opts = DecodeOptions::for_version(FormatVersion::V1);
//! assert_eq!(decompress_to_vec(&stream, &opts).unwrap(), b"ABC");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod decompress;

pub use decompress::{
    decompress, decompress_to_vec, read_header, BitReader, DecodeOptions, DecompressError,
    FormatVersion, HeaderWidth, JbcDecoder, OutputWindow, OversizePolicy,
};

#[cfg(feature = "parallel")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
pub use decompress::decompress_batch;
