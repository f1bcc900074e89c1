//! Plain-text rendering of a comparison run

use crate::compare::{Comparison, TraceReport};
use crate::types::format::SampleFormat;
use crate::types::mode::SequenceMode;

/// Formatting knobs for [`render`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Digits after the decimal point for magnitudes
    pub precision: usize,
    /// Elements shown per list before truncating, 0 shows everything
    pub max_items: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            precision: 4,
            max_items: 64,
        }
    }
}

/// Render every trace: its sequence, its spectrum and the strongest harmonic
pub fn render(comparison: &Comparison, traces: &[TraceReport], options: &ReportOptions) -> String {
    let word_len = comparison.word_len();
    let mode = comparison.mode();
    let format = SampleFormat::select(word_len, mode)
        .map(|f| f.name())
        .unwrap_or("u64");

    let mut out = format!(
        "Sequence ({} mode, L = {}, {}, {} samples)\n",
        mode.name(),
        word_len,
        format,
        comparison.x_limit()
    );

    for trace in traces {
        out.push_str(&format!(
            "{}: {}\n",
            trace.kind.name(),
            format_values(&trace.values, mode, word_len, options.max_items)
        ));
        out.push_str(&format!(
            "  FFT (offset removed): {}\n",
            format_magnitudes(&trace.magnitudes, options)
        ));
        if let Some((harmonic, amplitude)) = trace.peak() {
            out.push_str(&format!(
                "  peak: harmonic {}, amplitude {:.*}\n",
                harmonic, options.precision, amplitude
            ));
        }
    }

    out
}

fn shown(len: usize, max_items: usize) -> usize {
    if max_items == 0 { len } else { len.min(max_items) }
}

fn truncation_note(len: usize, count: usize) -> String {
    if count < len {
        format!(" ... ({} more)", len - count)
    } else {
        String::new()
    }
}

/// Words are space separated; bits are packed with a divider at each word boundary
fn format_values(values: &[u64], mode: SequenceMode, word_len: u32, max_items: usize) -> String {
    let count = shown(values.len(), max_items);
    let head = &values[..count];

    let body = match mode {
        SequenceMode::Word => head
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(" "),
        SequenceMode::Bit => head
            .chunks(word_len as usize)
            .map(|word| word.iter().map(|b| b.to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("|"),
    };

    body + &truncation_note(values.len(), count)
}

fn format_magnitudes(magnitudes: &[f64], options: &ReportOptions) -> String {
    let count = shown(magnitudes.len(), options.max_items);

    let body = magnitudes[..count]
        .iter()
        .map(|m| format!("{:.*}", options.precision, m))
        .collect::<Vec<_>>()
        .join(" ");

    body + &truncation_note(magnitudes.len(), count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::GeneratorKind;

    #[test]
    fn test_word_values() {
        assert_eq!(format_values(&[0, 1, 3, 2], SequenceMode::Word, 2, 0), "0 1 3 2");
    }

    #[test]
    fn test_bit_values_grouped_by_word() {
        let bits = [1, 1, 1, 0, 0, 1];
        assert_eq!(format_values(&bits, SequenceMode::Bit, 3, 0), "111|001");
    }

    #[test]
    fn test_truncation() {
        let values: Vec<u64> = (0..10).collect();
        assert_eq!(
            format_values(&values, SequenceMode::Word, 4, 3),
            "0 1 2 ... (7 more)"
        );

        let options = ReportOptions {
            precision: 1,
            max_items: 2,
        };
        assert_eq!(format_magnitudes(&[0.0, 1.26, 3.0], &options), "0.0 1.3 ... (1 more)");
    }

    #[test]
    fn test_render_lists_every_trace() {
        let comparison = Comparison::new(3, SequenceMode::Word, None).unwrap();
        let traces = comparison.analyze().unwrap();
        let text = render(&comparison, &traces, &ReportOptions::default());

        assert!(text.starts_with("Sequence (Word mode, L = 3, u8, 8 samples)"));
        assert!(text.contains("Binary: 0 1 2 3 4 5 6 7"));
        assert!(text.contains("Gray: 0 1 3 2 6 7 5 4"));
        assert!(text.contains("MLS: 7 4 6 1 5 3 2"));
        assert_eq!(text.matches("peak: harmonic").count(), 3);
    }

    #[test]
    fn test_render_without_harmonics() {
        let comparison = Comparison::new(1, SequenceMode::Word, None).unwrap();
        let traces = vec![TraceReport {
            kind: GeneratorKind::Mls,
            values: vec![1],
            magnitudes: vec![0.0],
        }];
        let text = render(&comparison, &traces, &ReportOptions::default());
        assert!(text.contains("MLS: 1"));
        assert!(!text.contains("peak"));
    }
}
