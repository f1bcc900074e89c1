pub mod spectrum;

pub use spectrum::{SpectrumAnalyzer, remove_mean};
