use log::debug;

use super::check_word_len;
use crate::error::SequenceError;
use crate::types::mode::SequenceMode;

/// Natural binary counting order: 0, 1, 2, ..., 2^L - 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinaryCounter {
    word_len: u32,
    mode: SequenceMode,
}

impl BinaryCounter {
    pub fn new(word_len: u32, mode: SequenceMode) -> Result<Self, SequenceError> {
        check_word_len(word_len)?;
        debug!("binary counter: {} bits, {} mode", word_len, mode.name());
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

    /// Fresh pass over the counter values
    pub fn words(&self) -> Counting {
        Counting::new(self.word_count())
    }
}

/// Ascending counter over `0..end`
#[derive(Debug, Clone)]
pub struct Counting {
    next: u64,
    end: u64,
}

impl Counting {
    pub(crate) fn new(end: u64) -> Self {
        Self { next: 0, end }
    }
}

impl Iterator for Counting {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.next >= self.end {
            return None;
        }
        let value = self.next;
        self.next += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.end - self.next).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Counting {}
