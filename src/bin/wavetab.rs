//! Command-line front end: generate one wavetable and print it.
//!
//! ```text
//! wavetab triangle --length 16 --depth 15
//! wavetab wastooth -l 32 -d 64 --unipolar --format hex
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use wavetab::{Format, Polarity, Waveform, generate, write_table};

#[derive(Parser)]
#[command(name = "wavetab")]
#[command(about = "Generate integer-friendly wavetables for small DACs")]
struct Cli {
    /// Waveform to sample: sine, triangle, sawtooth, wastooth or square
    waveform: Waveform,
    /// Number of samples in the table
    #[arg(short, long, default_value_t = 16)]
    length: usize,
    /// Peak value of the table
    #[arg(short, long, default_value_t = 15.0, allow_negative_numbers = true)]
    depth: f64,
    /// Phase offset in degrees
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    phase: f64,
    /// Span 0..=depth instead of -depth..=depth
    #[arg(short, long)]
    unipolar: bool,
    /// Output format: raw, truncated or hex
    #[arg(short, long, default_value_t = Format::Truncated)]
    format: Format,
    /// Log generation details to stderr (debug level instead of info)
    #[arg(short, long)]
    verbose: bool,
}

fn log_level(verbose: bool) -> log::LevelFilter {
    if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    }
}

fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .parse_default_env()
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "[{} {:5} {}] {}",
                buf.timestamp(),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let polarity = if cli.unipolar {
        Polarity::Unipolar
    } else {
        Polarity::Bipolar
    };
    debug!("selected {} waveform, {} output", cli.waveform, cli.format);

    let table = generate(
        polarity,
        cli.waveform.function(),
        cli.length,
        cli.depth,
        cli.phase,
    )
    .with_context(|| format!("failed to generate {} wavetable", cli.waveform))?;

    let stdout = std::io::stdout();
    write_table(&mut stdout.lock(), &table, cli.format).context("failed to print wavetable")?;
    info!("wrote {} samples", table.len());

    Ok(())
}
