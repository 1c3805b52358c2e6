//! Wavetab - Wavetable generation for tiny DACs
//!
//! This library samples one cycle of a periodic waveform into a fixed-length
//! table and prints it as floats, integers or hex, ready to be baked into the
//! firmware of a small microcontroller driving an R-2R resistor ladder.
//!
//! ```
//! use wavetab::{generate_bipolar, generate_unipolar, format, Waveform};
//!
//! // A 16-sample triangle between -15 and 15
//! let table = generate_bipolar(Waveform::Triangle.function(), 16, 15.0)?;
//! assert_eq!(table.len(), 16);
//!
//! // A 32-sample falling sawtooth between 0 and 64, as hex
//! let table = generate_unipolar(wavetab::waveforms::wastooth, 32, 64.0)?;
//! let line = format::render(&table, format::Format::Hexadecimal)?;
//! assert!(line.starts_with("0x40, 0x3e, 0x3c, "));
//! # Ok::<(), wavetab::WavetableError>(())
//! ```

pub mod error;
pub mod format;
pub mod generator;
pub mod waveforms;
pub mod wavetable;

// Re-export commonly used types at the crate root
pub use error::{Result, WavetableError};
pub use format::{Format, print_hexadecimal, print_raw, print_truncated, render, write_table};
pub use generator::{
    Polarity, generate, generate_bipolar, generate_bipolar_with_phase, generate_unipolar,
    generate_unipolar_with_phase,
};
pub use waveforms::Waveform;
pub use wavetable::Wavetable;

#[cfg(feature = "macros")]
pub use wavetab_macros::waveform;
