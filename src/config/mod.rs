use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::report::ReportOptions;
use crate::sequence::MAX_WORD_LEN;
use crate::types::format::SampleFormat;
use crate::types::mode::SequenceMode;

/// Top-level configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScopeConfig {
    #[serde(default = "default_word_len")]
    pub word_len: u32,

    #[serde(default)]
    pub gen_bits: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mls_taps: Option<TapSpec>,

    #[serde(default = "default_precision")]
    pub precision: usize,

    #[serde(default = "default_max_items")]
    pub max_items: usize,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            word_len: default_word_len(),
            gen_bits: false,
            mls_taps: None,
            precision: default_precision(),
            max_items: default_max_items(),
        }
    }
}

impl ScopeConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: ScopeConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.word_len < 1 {
            return Err(anyhow!("Word length must be >= 1"));
        }
        if self.word_len > MAX_WORD_LEN {
            return Err(anyhow!("Word length must be <= {}", MAX_WORD_LEN));
        }

        // Word mode needs a native container for each word
        SampleFormat::select(self.word_len, self.mode())?;

        if self.taps()? == Some(0) {
            return Err(anyhow!("MLS taps must select at least one bit"));
        }

        if self.precision > 12 {
            return Err(anyhow!("Precision must be between 0 and 12 digits"));
        }

        Ok(())
    }

    pub fn mode(&self) -> SequenceMode {
        SequenceMode::from_gen_bits(self.gen_bits)
    }

    /// Explicit MLS taps, if configured
    pub fn taps(&self) -> Result<Option<u64>> {
        self.mls_taps.as_ref().map(TapSpec::resolve).transpose()
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            precision: self.precision,
            max_items: self.max_items,
        }
    }
}

/// Tap mask given either as a YAML integer or as a prefixed string ("0b1001", "0x9")
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum TapSpec {
    Value(u64),
    Text(String),
}

impl TapSpec {
    pub fn resolve(&self) -> Result<u64> {
        match self {
            TapSpec::Value(v) => Ok(*v),
            TapSpec::Text(s) => parse_int_auto(s),
        }
    }
}

/// Parse an unsigned integer, picking the radix from its prefix
///
/// Accepts `0b`, `0o` and `0x` prefixes (any case) and plain decimal.
/// Underscores may separate digits. Decimal numbers may not start with a
/// zero unless every digit is zero.
pub fn parse_int_auto(text: &str) -> Result<u64> {
    let trimmed = text.trim();
    let lower = trimmed.to_lowercase();

    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else {
        (lower.as_str(), 10)
    };

    // A single underscore may follow the radix prefix
    let digits = match radix {
        10 => digits,
        _ => digits.strip_prefix('_').unwrap_or(digits),
    };
    if digits.is_empty() || digits.starts_with('_') || digits.ends_with('_') || digits.contains("__") {
        return Err(anyhow!("Invalid integer: {}", trimmed));
    }

    let cleaned: String = digits.chars().filter(|&c| c != '_').collect();
    if radix == 10 && cleaned.len() > 1 && cleaned.starts_with('0') && cleaned.chars().any(|c| c != '0') {
        return Err(anyhow!("Invalid integer (leading zero): {}", trimmed));
    }

    u64::from_str_radix(&cleaned, radix).with_context(|| format!("Invalid integer: {}", trimmed))
}

// Default value functions for serde
fn default_word_len() -> u32 {
    8
}

fn default_precision() -> usize {
    4
}

fn default_max_items() -> usize {
    64
}
