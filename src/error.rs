use thiserror::Error;

/// Errors raised while building a generator or analysing a signal
///
/// Every variant is a caller mistake detected up front: generators validate
/// their arguments at construction and never fail once iteration starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// Word length of zero
    #[error("word length must be positive")]
    NonPositiveWidth,

    /// Word count would not fit the 64-bit register
    #[error("word length {word_len} exceeds the maximum of {max} bits")]
    WidthTooLarge { word_len: u32, max: u32 },

    /// No default feedback taps are known for this width
    #[error("no default MLS taps for word length {word_len}, supply taps explicitly")]
    UnsupportedWidth { word_len: u32 },

    /// A tap mask of zero never feeds back
    #[error("MLS tap mask must select at least one register bit")]
    ZeroTaps,

    /// Word mode output is limited to 32-bit containers
    #[error("word length {word_len} does not fit a 32-bit word, use bit mode")]
    WordTooWide { word_len: u32 },

    /// Spectrum requested for an empty signal
    #[error("cannot compute the spectrum of an empty signal")]
    EmptyInput,
}
