use serde::{Deserialize, Serialize};

/// Output granularity of a sequence generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceMode {
    /// One element per L-bit word
    #[default]
    Word,
    /// Each word flattened into L elements, least significant bit first
    Bit,
}

impl SequenceMode {
    /// Map the `--gen-bits` flag onto a mode
    pub fn from_gen_bits(gen_bits: bool) -> Self {
        if gen_bits {
            SequenceMode::Bit
        } else {
            SequenceMode::Word
        }
    }

    /// Label for the sample axis
    pub fn name(&self) -> &'static str {
        match self {
            SequenceMode::Word => "Word",
            SequenceMode::Bit => "Bit",
        }
    }

    /// Number of output elements produced per generated word
    pub fn elements_per_word(&self, word_len: u32) -> u64 {
        match self {
            SequenceMode::Word => 1,
            SequenceMode::Bit => word_len as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_gen_bits() {
        assert_eq!(SequenceMode::from_gen_bits(true), SequenceMode::Bit);
        assert_eq!(SequenceMode::from_gen_bits(false), SequenceMode::Word);
    }

    #[test]
    fn test_elements_per_word() {
        assert_eq!(SequenceMode::Word.elements_per_word(12), 1);
        assert_eq!(SequenceMode::Bit.elements_per_word(12), 12);
    }

    #[test]
    fn test_default_is_word() {
        assert_eq!(SequenceMode::default(), SequenceMode::Word);
    }
}
