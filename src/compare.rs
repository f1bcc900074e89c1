use log::debug;

use crate::dsp::spectrum::{SpectrumAnalyzer, remove_mean};
use crate::error::SequenceError;
use crate::sequence::{GeneratorKind, SequenceGenerator};
use crate::types::mode::SequenceMode;

/// Sequence and spectrum of one generator
#[derive(Debug, Clone, PartialEq)]
pub struct TraceReport {
    pub kind: GeneratorKind,
    pub values: Vec<u64>,
    /// Spectrum of the sequence with its mean removed
    pub magnitudes: Vec<f64>,
}

impl TraceReport {
    /// Harmonic with the largest magnitude, ignoring DC
    pub fn peak(&self) -> Option<(usize, f64)> {
        self.magnitudes
            .iter()
            .copied()
            .enumerate()
            .skip(1)
            .fold(None, |best, (k, mag)| match best {
                Some((_, top)) if top >= mag => best,
                _ => Some((k, mag)),
            })
    }
}

/// Binary, Gray and MLS generators sharing one word length and mode
#[derive(Debug, Clone)]
pub struct Comparison {
    word_len: u32,
    mode: SequenceMode,
    generators: Vec<SequenceGenerator>,
}

impl Comparison {
    /// Build all three generators; the first construction error wins
    ///
    /// # Arguments
    /// * `word_len` - Bits per word
    /// * `mode` - Word or bit output
    /// * `mls_taps` - Explicit MLS feedback taps, `None` for the built-in table
    pub fn new(word_len: u32, mode: SequenceMode, mls_taps: Option<u64>) -> Result<Self, SequenceError> {
        let generators = vec![
            SequenceGenerator::binary(word_len, mode)?,
            SequenceGenerator::gray(word_len, mode)?,
            SequenceGenerator::mls(word_len, mode, mls_taps)?,
        ];

        Ok(Self {
            word_len,
            mode,
            generators,
        })
    }

    pub fn word_len(&self) -> u32 {
        self.word_len
    }

    pub fn mode(&self) -> SequenceMode {
        self.mode
    }

    pub fn generators(&self) -> &[SequenceGenerator] {
        &self.generators
    }

    /// Shared sample-axis extent: the longest trace
    pub fn x_limit(&self) -> u64 {
        self.generators.iter().map(|g| g.len()).max().unwrap_or(0)
    }

    /// Materialize every sequence and its offset-removed spectrum
    pub fn analyze(&self) -> Result<Vec<TraceReport>, SequenceError> {
        let mut analyzer = SpectrumAnalyzer::new();

        self.generators
            .iter()
            .map(|generator| -> Result<TraceReport, SequenceError> {
                let values = generator.to_vec();
                let signal: Vec<f64> = values.iter().map(|&v| v as f64).collect();
                let magnitudes = analyzer.magnitudes(&remove_mean(&signal))?;

                debug!(
                    "{}: {} samples, {} harmonics",
                    generator.kind().name(),
                    values.len(),
                    magnitudes.len()
                );

                Ok(TraceReport {
                    kind: generator.kind(),
                    values,
                    magnitudes,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_traces_in_order() {
        let comparison = Comparison::new(3, SequenceMode::Word, None).unwrap();
        let traces = comparison.analyze().unwrap();

        let kinds: Vec<GeneratorKind> = traces.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![GeneratorKind::Binary, GeneratorKind::Gray, GeneratorKind::Mls]
        );
        assert_eq!(traces[1].values, vec![0, 1, 3, 2, 6, 7, 5, 4]);
        assert_eq!(traces[2].values, vec![7, 4, 6, 1, 5, 3, 2]);
    }

    #[test]
    fn test_spectra_have_no_dc() {
        let comparison = Comparison::new(5, SequenceMode::Bit, None).unwrap();
        for trace in comparison.analyze().unwrap() {
            assert_eq!(trace.magnitudes.len(), trace.values.len() / 2 + 1);
            assert!(trace.magnitudes[0].abs() < 1e-9, "{} DC {}", trace.kind.name(), trace.magnitudes[0]);
        }
    }

    #[test]
    fn test_x_limit() {
        let words = Comparison::new(4, SequenceMode::Word, None).unwrap();
        assert_eq!(words.x_limit(), 16);

        let bits = Comparison::new(4, SequenceMode::Bit, None).unwrap();
        assert_eq!(bits.x_limit(), 64);
    }

    #[test]
    fn test_mls_error_propagates() {
        assert_eq!(
            Comparison::new(30, SequenceMode::Bit, None).unwrap_err(),
            SequenceError::UnsupportedWidth { word_len: 30 }
        );
    }

    #[test]
    fn test_peak_skips_dc() {
        let trace = TraceReport {
            kind: GeneratorKind::Binary,
            values: vec![],
            magnitudes: vec![9.0, 0.5, 2.0, 1.0],
        };
        assert_eq!(trace.peak(), Some((2, 2.0)));
    }
}
