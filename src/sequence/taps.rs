//! Feedback taps for maximal-length shift registers
//!
//! Source: W. Stahnke, Primitive binary polynomials,
//! Mathematics of Computation, 27:977-980, 1973.

/// Widest register with a default tap mask
pub const MAX_TAPPED_WIDTH: u32 = 24;

/// Tap masks indexed by word length; entry 0 is a placeholder
pub const MLS_TAPS: [u64; MAX_TAPPED_WIDTH as usize + 1] = [
    0,
    0b1,
    0b11,
    0b011,
    0b0011,
    0b00101,
    0b000011,
    0b0000011,
    0b01100011,
    0b000010001,
    0b0000001001,
    0b00000000101,
    0b000010011001,
    0b0000000011011,
    0b01100000000011,
    0b000000000000011,
    0b0000000000101101,
    0b00000000000001001,
    0b000000000010000001,
    0b0000000000001100011,
    0b00000000000000001001,
    0b000000000000000000101,
    0b0000000000000000000011,
    0b00000000000000000100001,
    0b000000000000000000011011,
];

/// Default tap mask for a register of `word_len` bits, if one is known
pub fn default_taps(word_len: u32) -> Option<u64> {
    if word_len == 0 || word_len > MAX_TAPPED_WIDTH {
        return None;
    }
    Some(MLS_TAPS[word_len as usize])
}
