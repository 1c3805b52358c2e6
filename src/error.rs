//! Error type shared by generation, formatting and parsing.

use std::fmt;
use std::io;

/// Errors produced while generating, rounding or printing a wavetable.
#[derive(Debug)]
pub enum WavetableError {
    /// A generation parameter or a generated sample was NaN or infinite.
    ///
    /// `index` is `None` when the offending value was a parameter rather
    /// than a sample.
    NonFinite { index: Option<usize>, value: f64 },
    /// A sample could not be rounded to an `i64`
    NotRepresentable { index: usize, value: f64 },
    /// The waveform name was not recognized
    UnknownWaveform(String),
    /// The output format name was not recognized
    UnknownFormat(String),
    /// Writing to the output sink failed
    Io(io::Error),
}

impl fmt::Display for WavetableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WavetableError::NonFinite { index: Some(i), value } => {
                write!(f, "sample {} is not a finite number: {}", i, value)
            }
            WavetableError::NonFinite { index: None, value } => {
                write!(f, "generation parameter is not a finite number: {}", value)
            }
            WavetableError::NotRepresentable { index, value } => {
                write!(f, "sample {} cannot be rounded to an integer: {}", index, value)
            }
            WavetableError::UnknownWaveform(s) => write!(f, "unknown waveform: '{}'", s),
            WavetableError::UnknownFormat(s) => write!(f, "unknown output format: '{}'", s),
            WavetableError::Io(e) => write!(f, "failed to write wavetable: {}", e),
        }
    }
}

impl std::error::Error for WavetableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WavetableError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for WavetableError {
    fn from(e: io::Error) -> Self {
        WavetableError::Io(e)
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WavetableError>;
