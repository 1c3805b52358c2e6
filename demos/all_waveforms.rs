//! Prints every built-in waveform in every output format.
//!
//! The tables are unipolar 4-bit (0..=15), which is what a 4-resistor R-2R
//! ladder on a port of a small microcontroller can play back directly.

use anyhow::Result;
use std::io::{Write, stdout};
use wavetab::{Format, Waveform, generate_unipolar_with_phase, write_table};

const LENGTH: usize = 16;
const DEPTH: f64 = 15.0;

fn main() -> Result<()> {
    env_logger::init();

    let phase = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<f64>())
        .transpose()?
        .unwrap_or(0.0);

    let mut out = stdout().lock();
    for waveform in Waveform::ALL {
        let table = generate_unipolar_with_phase(waveform.function(), LENGTH, DEPTH, phase)?;
        writeln!(out, "{} ({} samples, {} deg):", waveform, LENGTH, phase)?;
        for format in [Format::Raw, Format::Truncated, Format::Hexadecimal] {
            write!(out, "  {:<12}", format.name())?;
            write_table(&mut out, &table, format)?;
        }
    }

    Ok(())
}
