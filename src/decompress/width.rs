//! Match offset field widths.
//!
//! The offset of a match token is written with just enough bits to address
//! every byte in the current window. The width is recomputed from the
//! output position at each match, never stored, so an encoder must use these
//! same functions or its streams will silently misdecode.

use super::FormatVersion;

/// Bits in the widest offset field.
const SHORT_BITS: u32 = 16;

/// Match window for version 0 streams.
pub const MATCH_WINDOW_V0: usize = 8192;

/// Match window for version 1 streams.
pub const MATCH_WINDOW_V1: usize = MATCH_WINDOW_V0 - 1;

/// Minimum number of bits needed to represent `n`.
///
/// `bits_required(0)` is 1, not 0, so a field is always present.
#[inline]
pub const fn bits_required(n: u16) -> u32 {
    if n == 0 {
        1
    } else {
        SHORT_BITS - n.leading_zeros()
    }
}

/// Size of the back-reference window for a format version.
#[inline]
pub const fn match_window_size(version: FormatVersion) -> usize {
    match version {
        FormatVersion::V0 => MATCH_WINDOW_V0,
        FormatVersion::V1 => MATCH_WINDOW_V1,
    }
}

/// Width of the offset field of a match token decoded at output position
/// `pos`.
///
/// Grows one bit at a time while the window fills, then stays at
/// `bits_required(window)`.
#[inline]
pub const fn offset_width(pos: usize, version: FormatVersion) -> u32 {
    let window = match_window_size(version);
    let capped = if pos > window { window } else { pos };
    bits_required(capped as u16)
}
