//! Maximal-length sequence from a linear-feedback shift register
//!
//! The register starts with every bit set and is clocked L times between
//! emitted words, so each word is the register sampled once per L feedback
//! cycles rather than the raw per-clock bit stream. Bit mode flattens these
//! sampled words like any other generator.
//!
//! Reference: http://www.kempacoustics.com/thesis/node83.html

use log::debug;

use super::check_word_len;
use super::taps::default_taps;
use crate::error::SequenceError;
use crate::types::mode::SequenceMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MlsLfsr {
    word_len: u32,
    mode: SequenceMode,
    taps: u64,
}

impl MlsLfsr {
    /// Create an MLS generator
    ///
    /// # Arguments
    /// * `word_len` - Register width in bits
    /// * `mode` - Word or bit output
    /// * `taps` - Feedback tap mask, or `None` for the built-in primitive taps
    pub fn new(word_len: u32, mode: SequenceMode, taps: Option<u64>) -> Result<Self, SequenceError> {
        check_word_len(word_len)?;

        let taps = match taps {
            Some(0) => return Err(SequenceError::ZeroTaps),
            Some(taps) => taps,
            None => default_taps(word_len).ok_or(SequenceError::UnsupportedWidth { word_len })?,
        };

        debug!(
            "mls lfsr: {} bits, {} mode, taps {:#b}",
            word_len,
            mode.name(),
            taps
        );
        Ok(Self {
            word_len,
            mode,
            taps,
        })
    }

    pub fn word_len(&self) -> u32 {
        self.word_len
    }

    pub fn mode(&self) -> SequenceMode {
        self.mode
    }

    /// Effective feedback tap mask
    pub fn taps(&self) -> u64 {
        self.taps
    }

    /// 2^L - 1 words; the all-zero state never appears
    pub fn word_count(&self) -> u64 {
        (1u64 << self.word_len) - 1
    }

    pub fn words(&self) -> MlsWords {
        let all_ones = self.word_count();
        MlsWords {
            register: all_ones,
            taps: self.taps,
            msb: 1u64 << (self.word_len - 1),
            word_len: self.word_len,
            remaining: all_ones,
            started: false,
        }
    }
}

/// One pass over the register; owns its own state so passes never interfere
#[derive(Debug, Clone)]
pub struct MlsWords {
    register: u64,
    taps: u64,
    msb: u64,
    word_len: u32,
    remaining: u64,
    started: bool,
}

impl MlsWords {
    /// Single feedback clock: shift right, parity of the tapped bits enters at the top
    fn clock(&mut self) {
        let feedback = (self.register & self.taps).count_ones() & 1;
        self.register = (self.register >> 1) | (feedback as u64 * self.msb);
    }
}

impl Iterator for MlsWords {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        if self.started {
            for _ in 0..self.word_len {
                self.clock();
            }
        } else {
            self.started = true;
        }

        Some(self.register)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.remaining).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for MlsWords {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_bit_sequence() {
        let mls = MlsLfsr::new(3, SequenceMode::Word, Some(0b011)).unwrap();
        let words: Vec<u64> = mls.words().collect();
        assert_eq!(words, vec![7, 4, 6, 1, 5, 3, 2]);
    }

    #[test]
    fn test_default_taps_match_table() {
        let mls = MlsLfsr::new(3, SequenceMode::Word, None).unwrap();
        assert_eq!(mls.taps(), 0b011);
        let words: Vec<u64> = mls.words().collect();
        assert_eq!(words, vec![7, 4, 6, 1, 5, 3, 2]);
    }

    #[test]
    fn test_single_bit_register() {
        let mls = MlsLfsr::new(1, SequenceMode::Word, None).unwrap();
        let words: Vec<u64> = mls.words().collect();
        assert_eq!(words, vec![1]);
    }

    #[test]
    fn test_first_word_is_all_ones() {
        let mls = MlsLfsr::new(12, SequenceMode::Word, None).unwrap();
        assert_eq!(mls.words().next(), Some(0xFFF));
    }

    #[test]
    fn test_word_count_excludes_zero() {
        let mls = MlsLfsr::new(8, SequenceMode::Word, None).unwrap();
        assert_eq!(mls.word_count(), 255);
        assert_eq!(mls.words().len(), 255);
        assert!(mls.words().all(|w| w != 0));
    }

    #[test]
    fn test_unsupported_width() {
        assert_eq!(
            MlsLfsr::new(30, SequenceMode::Word, None),
            Err(SequenceError::UnsupportedWidth { word_len: 30 })
        );
    }

    #[test]
    fn test_explicit_taps_beyond_table() {
        // x^31 + x^3 + 1 in the table's bit order
        let mls = MlsLfsr::new(31, SequenceMode::Word, Some(0b1001)).unwrap();
        assert_eq!(mls.taps(), 0b1001);
        assert_eq!(mls.word_count(), (1u64 << 31) - 1);
    }

    #[test]
    fn test_zero_width_checked_before_taps() {
        assert_eq!(
            MlsLfsr::new(0, SequenceMode::Word, None),
            Err(SequenceError::NonPositiveWidth)
        );
    }

    #[test]
    fn test_zero_taps_rejected() {
        assert_eq!(
            MlsLfsr::new(4, SequenceMode::Word, Some(0)),
            Err(SequenceError::ZeroTaps)
        );
    }
}
