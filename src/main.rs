use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use seqscope::Comparison;
use seqscope::config::{ScopeConfig, parse_int_auto};
use seqscope::report;

/// Compare binary, Gray and MLS sequences and their spectra
#[derive(Parser, Debug)]
#[command(name = "seqscope")]
#[command(about = "Shows the sequence and FFT of various binary sequences", long_about = None)]
struct Args {
    /// Configuration file (YAML); flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Use sequences of bits instead of words
    #[arg(short = 'b', long = "gen-bits")]
    gen_bits: bool,

    /// Word length (number of bits in each word)
    #[arg(short = 'l', long = "word-len", value_name = "L")]
    word_len: Option<u32>,

    /// Taps for the LFSR used to generate the MLS sequence (0b/0o/0x prefixes allowed)
    #[arg(short = 't', long = "mls-taps", value_name = "T", value_parser = parse_taps)]
    mls_taps: Option<u64>,

    /// Digits after the decimal point for FFT magnitudes
    #[arg(short = 'p', long = "precision", value_name = "P")]
    precision: Option<usize>,

    /// Elements printed per list, 0 prints everything
    #[arg(short = 'n', long = "max-items", value_name = "N")]
    max_items: Option<usize>,
}

fn parse_taps(text: &str) -> Result<u64, String> {
    parse_int_auto(text).map_err(|e| e.to_string())
}

/// Config file (or defaults) with command line flags applied on top
fn resolve_config(args: &Args) -> Result<ScopeConfig> {
    let mut config = match &args.config {
        Some(path) => ScopeConfig::load(path)?,
        None => ScopeConfig::default(),
    };

    if args.gen_bits {
        config.gen_bits = true;
    }
    if let Some(word_len) = args.word_len {
        config.word_len = word_len;
    }
    if let Some(taps) = args.mls_taps {
        config.mls_taps = Some(seqscope::config::TapSpec::Value(taps));
    }
    if let Some(precision) = args.precision {
        config.precision = precision;
    }
    if let Some(max_items) = args.max_items {
        config.max_items = max_items;
    }

    config.validate().context("Invalid options")?;
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::init();

    // Parse command line arguments
    let args = Args::parse();
    let config = resolve_config(&args)?;

    let taps = config.taps()?;
    info!(
        "comparing {}-bit sequences in {} mode",
        config.word_len,
        config.mode().name()
    );

    let comparison = Comparison::new(config.word_len, config.mode(), taps)
        .context("Failed to build sequence generators")?;
    let traces = comparison.analyze()?;

    print!("{}", report::render(&comparison, &traces, &config.report_options()));

    Ok(())
}
