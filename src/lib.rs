//! Binary, Gray and maximal-length sequence generators with a one-sided
//! amplitude spectrum for comparing them.

pub mod compare;
pub mod config;
pub mod dsp;
pub mod error;
pub mod report;
pub mod sequence;
pub mod types;

pub use compare::{Comparison, TraceReport};
pub use dsp::spectrum::{SpectrumAnalyzer, remove_mean};
pub use error::SequenceError;
pub use sequence::{BinaryCounter, GeneratorKind, GrayCoder, MlsLfsr, SequenceGenerator, SequenceIter};
pub use types::mode::SequenceMode;
