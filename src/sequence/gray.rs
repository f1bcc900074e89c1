use log::debug;

use super::binary::Counting;
use super::check_word_len;
use crate::error::SequenceError;
use crate::types::mode::SequenceMode;

/// Reflected binary (Gray) code of a counter value
pub fn gray_encode(n: u64) -> u64 {
    n ^ (n >> 1)
}

/// Reflected binary code: consecutive words differ in one bit,
/// including the wrap from the last word back to the first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrayCoder {
    word_len: u32,
    mode: SequenceMode,
}

impl GrayCoder {
    pub fn new(word_len: u32, mode: SequenceMode) -> Result<Self, SequenceError> {
        check_word_len(word_len)?;
        debug!("gray coder: {} bits, {} mode", word_len, mode.name());
        Ok(Self { word_len, mode })
    }

    pub fn word_len(&self) -> u32 {
        self.word_len
    }

    pub fn mode(&self) -> SequenceMode {
        self.mode
    }

    /// 2^L words
    pub fn word_count(&self) -> u64 {
        1u64 << self.word_len
    }

    pub fn words(&self) -> GrayWords {
        GrayWords {
            counter: Counting::new(self.word_count()),
        }
    }
}

/// Gray-coded view of the binary counter
#[derive(Debug, Clone)]
pub struct GrayWords {
    counter: Counting,
}

impl Iterator for GrayWords {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.counter.next().map(gray_encode)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.counter.size_hint()
    }
}

impl ExactSizeIterator for GrayWords {}
