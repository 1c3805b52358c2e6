//! The two classic tables: a small triangle and a larger falling sawtooth.
//!
//! Run with `RUST_LOG=debug` to see the generation parameters.

use anyhow::Result;
use wavetab::{generate_bipolar, generate_unipolar, print_hexadecimal, print_truncated};
use wavetab::waveforms::{triangle, wastooth};

fn main() -> Result<()> {
    env_logger::init();

    // Generate a 16-number long triangle wavetable between -15 and 15.
    let table = generate_bipolar(triangle, 16, 15.0)?;

    // Print it as a list of integers.
    print_truncated(&table)?;

    // Generate a 32-number long inverted sawtooth wavetable between 0 and 64.
    let bigger = generate_unipolar(wastooth, 32, 64.0)?;

    // Print it as a list of hexadecimal numbers.
    print_hexadecimal(&bigger)?;

    Ok(())
}
