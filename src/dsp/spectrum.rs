//! One-sided amplitude spectrum of a real signal

use log::debug;
use rustfft::{Fft, FftPlanner, num_complex::Complex64};
use std::fmt;
use std::sync::Arc;

use crate::error::SequenceError;

/// FFT magnitude analyzer
///
/// Holds an FFT planner so analysing several signals of the same length
/// reuses one plan.
pub struct SpectrumAnalyzer {
    planner: FftPlanner<f64>,
}

impl fmt::Debug for SpectrumAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SpectrumAnalyzer").finish_non_exhaustive()
    }
}

impl SpectrumAnalyzer {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Single-sided amplitude of each non-negative frequency bin
    ///
    /// Returns `N / 2 + 1` values for `N` input samples. Bins are scaled by
    /// `2 / N` so a sinusoid reports its amplitude; the DC bin has no mirrored
    /// partner and is halved back. No detrending is applied, see
    /// [`remove_mean`].
    pub fn magnitudes(&mut self, signal: &[f64]) -> Result<Vec<f64>, SequenceError> {
        if signal.is_empty() {
            return Err(SequenceError::EmptyInput);
        }

        let n = signal.len();
        let fft: Arc<dyn Fft<f64>> = self.planner.plan_fft_forward(n);
        let mut buffer: Vec<Complex64> = signal.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        fft.process(&mut buffer);

        let scale = 2.0 / n as f64;
        let mut mags: Vec<f64> = buffer[..n / 2 + 1]
            .iter()
            .map(|bin| bin.norm() * scale)
            .collect();
        mags[0] /= 2.0;

        debug!("spectrum: {} samples -> {} bins", n, mags.len());
        Ok(mags)
    }
}

impl Default for SpectrumAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Subtract the arithmetic mean from every sample
pub fn remove_mean(signal: &[f64]) -> Vec<f64> {
    if signal.is_empty() {
        return Vec::new();
    }
    let mean = signal.iter().sum::<f64>() / signal.len() as f64;
    signal.iter().map(|x| x - mean).collect()
}
