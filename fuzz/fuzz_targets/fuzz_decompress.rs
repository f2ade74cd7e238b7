#![no_main]
use jbc_decompress::{decompress, DecodeOptions, FormatVersion, HeaderWidth, OversizePolicy};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the options, the rest is the stream
    let flags = data[0];
    let opts = DecodeOptions {
        version: if flags & 1 == 0 { FormatVersion::V0 } else { FormatVersion::V1 },
        header_width: if flags & 2 == 0 { HeaderWidth::Four } else { HeaderWidth::Eight },
        oversize_policy: if flags & 4 == 0 {
            OversizePolicy::Error
        } else {
            OversizePolicy::ReturnZero
        },
        ..Default::default()
    };

    // Output capped at 64KB to avoid OOM
    let mut out = vec![0u8; 64 * 1024];
    if let Ok(n) = decompress(&data[1..], &mut out, &opts) {
        assert!(n <= out.len());
        assert!(out[n..].iter().all(|&b| b == 0));
    }
});
