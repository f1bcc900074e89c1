use super::mode::SequenceMode;
use crate::error::SequenceError;

/// Narrowest native container that holds one sequence element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleFormat {
    Bit,
    U8,
    U16,
    U32,
}

impl SampleFormat {
    /// Pick the container for `word_len`-bit elements in the given mode
    ///
    /// Bit mode always fits a single bit. Word mode stops at 32 bits.
    pub fn select(word_len: u32, mode: SequenceMode) -> Result<Self, SequenceError> {
        if word_len == 0 {
            return Err(SequenceError::NonPositiveWidth);
        }

        match mode {
            SequenceMode::Bit => Ok(SampleFormat::Bit),
            SequenceMode::Word => match word_len {
                1..=8 => Ok(SampleFormat::U8),
                9..=16 => Ok(SampleFormat::U16),
                17..=32 => Ok(SampleFormat::U32),
                _ => Err(SequenceError::WordTooWide { word_len }),
            },
        }
    }

    /// Container width in bits
    pub fn bits(&self) -> u32 {
        match self {
            SampleFormat::Bit => 1,
            SampleFormat::U8 => 8,
            SampleFormat::U16 => 16,
            SampleFormat::U32 => 32,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SampleFormat::Bit => "bool",
            SampleFormat::U8 => "u8",
            SampleFormat::U16 => "u16",
            SampleFormat::U32 => "u32",
        }
    }
}
