use std::f64::consts::PI;

use seqscope::{Comparison, SequenceError, SequenceGenerator, SequenceMode, SpectrumAnalyzer, remove_mean};

#[test]
fn test_sinusoid_amplitude_at_its_bin() {
    let n = 256;
    let (amplitude, bin) = (3.5, 17);
    let signal: Vec<f64> = (0..n)
        .map(|i| amplitude * (2.0 * PI * bin as f64 * i as f64 / n as f64).sin())
        .collect();

    let mags = SpectrumAnalyzer::new().magnitudes(&signal).unwrap();
    assert_eq!(mags.len(), n / 2 + 1);
    assert!((mags[bin] - amplitude).abs() < 1e-9, "got {}", mags[bin]);
    for (k, mag) in mags.iter().enumerate().filter(|(k, _)| *k != bin) {
        assert!(*mag < 1e-9, "bin {} = {}", k, mag);
    }
}

#[test]
fn test_constant_signal_after_mean_removal_is_silent() {
    let mags = SpectrumAnalyzer::new()
        .magnitudes(&remove_mean(&[7.0; 33]))
        .unwrap();
    assert_eq!(mags.len(), 17);
    assert!(mags.iter().all(|m| *m == 0.0));
}

#[test]
fn test_empty_signal_rejected() {
    assert_eq!(
        SpectrumAnalyzer::new().magnitudes(&[]),
        Err(SequenceError::EmptyInput)
    );
}

#[test]
fn test_binary_bit_zero_is_a_nyquist_square_wave() {
    // Bit mode with L = 1 is the alternating sequence 0, 1, 0, 1
    let bits = SequenceGenerator::binary(1, SequenceMode::Bit).unwrap();
    assert_eq!(bits.to_vec(), vec![0, 1]);

    let signal = remove_mean(&bits.to_signal());
    let mags = SpectrumAnalyzer::new().magnitudes(&signal).unwrap();
    // Nyquist bin gets the 2/N scaling like every non-DC bin
    assert!((mags[1] - 1.0).abs() < 1e-12);
    assert!(mags[0].abs() < 1e-12);
}

#[test]
fn test_mls_spectrum_is_flatter_than_binary() {
    let comparison = Comparison::new(10, SequenceMode::Word, None).unwrap();
    let traces = comparison.analyze().unwrap();

    let spread = |mags: &[f64]| {
        let body = &mags[1..];
        let max = body.iter().cloned().fold(f64::MIN, f64::max);
        let mean = body.iter().sum::<f64>() / body.len() as f64;
        max / mean
    };

    let binary = spread(&traces[0].magnitudes);
    let mls = spread(&traces[2].magnitudes);
    assert!(mls < binary, "mls {} binary {}", mls, binary);
}
