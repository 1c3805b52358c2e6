//! Selecting a waveform with the `waveform!` macro.
//!
//! A typo in the name is caught by the compiler rather than at runtime.

use anyhow::Result;
use wavetab::{generate_bipolar, print_truncated, waveform};

fn main() -> Result<()> {
    let shape = waveform!("sine");
    let table = generate_bipolar(shape.function(), 32, 127.0)?;
    println!("{} table for an 8-bit signed DAC:", shape);
    print_truncated(&table)?;
    Ok(())
}
