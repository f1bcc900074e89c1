pub mod binary;
pub mod gray;
pub mod mls;
pub mod taps;

pub use binary::BinaryCounter;
pub use gray::GrayCoder;
pub use mls::MlsLfsr;

use crate::error::SequenceError;
use crate::types::mode::SequenceMode;

/// Widest supported register; keeps bit-mode lengths well inside u64
pub const MAX_WORD_LEN: u32 = 48;

pub(crate) fn check_word_len(word_len: u32) -> Result<(), SequenceError> {
    if word_len == 0 {
        return Err(SequenceError::NonPositiveWidth);
    }
    if word_len > MAX_WORD_LEN {
        return Err(SequenceError::WidthTooLarge {
            word_len,
            max: MAX_WORD_LEN,
        });
    }
    Ok(())
}

/// Sequence family of a generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Binary,
    Gray,
    Mls,
}

impl GeneratorKind {
    pub fn name(&self) -> &'static str {
        match self {
            GeneratorKind::Binary => "Binary",
            GeneratorKind::Gray => "Gray",
            GeneratorKind::Mls => "MLS",
        }
    }
}

/// Any of the three sequence generators
///
/// Every call to [`SequenceGenerator::iter`] starts a fresh pass from the
/// first word; passes share nothing but the immutable configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceGenerator {
    Binary(BinaryCounter),
    Gray(GrayCoder),
    Mls(MlsLfsr),
}

impl SequenceGenerator {
    pub fn binary(word_len: u32, mode: SequenceMode) -> Result<Self, SequenceError> {
        BinaryCounter::new(word_len, mode).map(SequenceGenerator::Binary)
    }

    pub fn gray(word_len: u32, mode: SequenceMode) -> Result<Self, SequenceError> {
        GrayCoder::new(word_len, mode).map(SequenceGenerator::Gray)
    }

    pub fn mls(word_len: u32, mode: SequenceMode, taps: Option<u64>) -> Result<Self, SequenceError> {
        MlsLfsr::new(word_len, mode, taps).map(SequenceGenerator::Mls)
    }

    pub fn kind(&self) -> GeneratorKind {
        match self {
            SequenceGenerator::Binary(_) => GeneratorKind::Binary,
            SequenceGenerator::Gray(_) => GeneratorKind::Gray,
            SequenceGenerator::Mls(_) => GeneratorKind::Mls,
        }
    }

    pub fn word_len(&self) -> u32 {
        match self {
            SequenceGenerator::Binary(g) => g.word_len(),
            SequenceGenerator::Gray(g) => g.word_len(),
            SequenceGenerator::Mls(g) => g.word_len(),
        }
    }

    pub fn mode(&self) -> SequenceMode {
        match self {
            SequenceGenerator::Binary(g) => g.mode(),
            SequenceGenerator::Gray(g) => g.mode(),
            SequenceGenerator::Mls(g) => g.mode(),
        }
    }

    /// Number of L-bit words in one pass
    pub fn word_count(&self) -> u64 {
        match self {
            SequenceGenerator::Binary(g) => g.word_count(),
            SequenceGenerator::Gray(g) => g.word_count(),
            SequenceGenerator::Mls(g) => g.word_count(),
        }
    }

    /// Number of elements in one pass: words, or words * L in bit mode
    pub fn len(&self) -> u64 {
        self.word_count() * self.mode().elements_per_word(self.word_len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start a fresh pass from the first element
    pub fn iter(&self) -> SequenceIter {
        let words = match self {
            SequenceGenerator::Binary(g) => WordSource::Binary(g.words()),
            SequenceGenerator::Gray(g) => WordSource::Gray(g.words()),
            SequenceGenerator::Mls(g) => WordSource::Mls(g.words()),
        };

        match self.mode() {
            SequenceMode::Word => SequenceIter::Words(words),
            SequenceMode::Bit => SequenceIter::Bits(Bits::new(words, self.word_len())),
        }
    }

    /// Materialize one pass
    pub fn to_vec(&self) -> Vec<u64> {
        self.iter().collect()
    }

    /// One pass as real-valued samples
    pub fn to_signal(&self) -> Vec<f64> {
        self.iter().map(|v| v as f64).collect()
    }
}

impl From<BinaryCounter> for SequenceGenerator {
    fn from(g: BinaryCounter) -> Self {
        SequenceGenerator::Binary(g)
    }
}

impl From<GrayCoder> for SequenceGenerator {
    fn from(g: GrayCoder) -> Self {
        SequenceGenerator::Gray(g)
    }
}

impl From<MlsLfsr> for SequenceGenerator {
    fn from(g: MlsLfsr) -> Self {
        SequenceGenerator::Mls(g)
    }
}

impl<'a> IntoIterator for &'a SequenceGenerator {
    type Item = u64;
    type IntoIter = SequenceIter;

    fn into_iter(self) -> SequenceIter {
        self.iter()
    }
}

/// Word-level pass of one generator family
#[derive(Debug, Clone)]
pub enum WordSource {
    Binary(binary::Counting),
    Gray(gray::GrayWords),
    Mls(mls::MlsWords),
}

impl Iterator for WordSource {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        match self {
            WordSource::Binary(it) => it.next(),
            WordSource::Gray(it) => it.next(),
            WordSource::Mls(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            WordSource::Binary(it) => it.size_hint(),
            WordSource::Gray(it) => it.size_hint(),
            WordSource::Mls(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for WordSource {}

/// Flattens L-bit words into single bits, least significant first
#[derive(Debug, Clone)]
pub struct Bits<I> {
    words: I,
    word_len: u32,
    word: u64,
    shift: u32,
}

impl<I: Iterator<Item = u64>> Bits<I> {
    pub fn new(words: I, word_len: u32) -> Self {
        Self {
            words,
            word_len,
            word: 0,
            // Forces a fetch on the first call
            shift: word_len,
        }
    }
}

impl<I: Iterator<Item = u64>> Iterator for Bits<I> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.shift == self.word_len {
            self.word = self.words.next()?;
            self.shift = 0;
        }
        let bit = (self.word >> self.shift) & 1;
        self.shift += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lo, hi) = self.words.size_hint();
        let pending = (self.word_len - self.shift) as usize;
        let per_word = self.word_len as usize;
        (
            lo.saturating_mul(per_word).saturating_add(pending),
            hi.and_then(|h| h.checked_mul(per_word)?.checked_add(pending)),
        )
    }
}

impl<I: ExactSizeIterator<Item = u64>> ExactSizeIterator for Bits<I> {}

/// One pass over a generator's output
#[derive(Debug, Clone)]
pub enum SequenceIter {
    Words(WordSource),
    Bits(Bits<WordSource>),
}

impl Iterator for SequenceIter {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        match self {
            SequenceIter::Words(it) => it.next(),
            SequenceIter::Bits(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            SequenceIter::Words(it) => it.size_hint(),
            SequenceIter::Bits(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for SequenceIter {}
