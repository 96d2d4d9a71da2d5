//! Brightness envelope lookup
//!
//! A raised-cosine breathing curve sampled at 128 points. Index 0 is dark,
//! index 64 is full brightness.

/// Number of entries in [`WAVE_TABLE`]
pub const WAVE_TABLE_LEN: usize = 128;

/// Phase to brightness envelope table
pub const WAVE_TABLE: [u8; WAVE_TABLE_LEN] = [
      0,   0,   1,   1,   2,   4,   5,   7,  10,  12,  15,  18,  21,  25,  29,  33,
     37,  42,  47,  52,  57,  62,  67,  73,  79,  85,  90,  97, 103, 109, 115, 121,
    127, 134, 140, 146, 152, 158, 165, 170, 176, 182, 188, 193, 198, 203, 208, 213,
    218, 222, 226, 230, 234, 237, 240, 243, 245, 248, 250, 251, 253, 254, 254, 255,
    255, 255, 254, 254, 253, 251, 250, 248, 245, 243, 240, 237, 234, 230, 226, 222,
    218, 213, 208, 203, 198, 193, 188, 182, 176, 170, 165, 158, 152, 146, 140, 134,
    128, 121, 115, 109, 103,  97,  90,  85,  79,  73,  67,  62,  57,  52,  47,  42,
     37,  33,  29,  25,  21,  18,  15,  12,  10,   7,   5,   4,   2,   1,   1,   0,
];

/// Reduce an unbounded phase into the table range
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn phase_index(phase: u32) -> usize {
    (phase % WAVE_TABLE_LEN as u32) as usize
}

/// Look up the envelope for an unbounded phase
#[inline]
pub const fn envelope(phase: u32) -> u8 {
    WAVE_TABLE[phase_index(phase)]
}
