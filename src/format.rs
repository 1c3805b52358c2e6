//! Text rendering of wavetables.
//!
//! A table is rendered as a single line in which every sample is followed by
//! `", "`, including the last one, so the output can be pasted straight into
//! a C array initializer:
//!
//! ```
//! use wavetab::{format::{render, Format}, generate_unipolar, waveforms::wastooth};
//!
//! let table = generate_unipolar(wastooth, 4, 64.0).unwrap();
//! assert_eq!(render(&table, Format::Raw).unwrap(), "64.0, 48.0, 32.0, 16.0, ");
//! assert_eq!(render(&table, Format::Hexadecimal).unwrap(), "0x40, 0x30, 0x20, 0x10, ");
//! ```

use crate::error::{Result, WavetableError};
use crate::wavetable::{Wavetable, round_sample};
use log::trace;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

const SEPARATOR: &str = ", ";

/// How each sample is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// The unmodified floating-point value, in its shortest exact form
    Raw,
    /// The sample rounded to the nearest integer, ties to even
    ///
    /// `2.5` becomes `2` and `3.5` becomes `4`.
    #[default]
    Truncated,
    /// The rounded sample as lower-case hex, e.g. `0x1f` or `-0x5`
    Hexadecimal,
}

impl Format {
    pub fn name(self) -> &'static str {
        match self {
            Format::Raw => "raw",
            Format::Truncated => "truncated",
            Format::Hexadecimal => "hexadecimal",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = WavetableError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "raw" | "float" => Ok(Format::Raw),
            "truncated" | "int" | "integer" | "decimal" => Ok(Format::Truncated),
            "hexadecimal" | "hex" => Ok(Format::Hexadecimal),
            _ => Err(WavetableError::UnknownFormat(s.to_string())),
        }
    }
}

/// Renders `table` as one line of text, without a trailing newline.
///
/// # Errors
///
/// [`Format::Truncated`] and [`Format::Hexadecimal`] fail with
/// [`WavetableError::NotRepresentable`] if a sample does not fit in an `i64`.
pub fn render(table: &Wavetable, format: Format) -> Result<String> {
    trace!("rendering {} samples as {}", table.len(), format);

    let mut line = String::new();
    for (index, &sample) in table.iter().enumerate() {
        line.push_str(&format_sample(index, sample, format)?);
        line.push_str(SEPARATOR);
    }
    Ok(line)
}

fn format_sample(index: usize, sample: f64, format: Format) -> Result<String> {
    let text = match format {
        Format::Raw => format!("{:?}", sample),
        Format::Truncated => round_sample(index, sample)?.to_string(),
        Format::Hexadecimal => hex(round_sample(index, sample)?),
    };
    Ok(text)
}

fn hex(value: i64) -> String {
    if value < 0 {
        format!("-{:#x}", value.unsigned_abs())
    } else {
        format!("{:#x}", value)
    }
}

/// Writes `table` to `sink` as one line, followed by a newline.
///
/// ```
/// use wavetab::{format::{write_table, Format}, generate_bipolar, waveforms::square};
///
/// let table = generate_bipolar(square, 2, 5.0).unwrap();
/// let mut out = Vec::new();
/// write_table(&mut out, &table, Format::Hexadecimal).unwrap();
/// assert_eq!(out, b"0x5, -0x5, \n");
/// ```
pub fn write_table<W: Write>(sink: &mut W, table: &Wavetable, format: Format) -> Result<()> {
    let line = render(table, format)?;
    writeln!(sink, "{}", line)?;
    Ok(())
}

fn print_table(table: &Wavetable, format: Format) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_table(&mut lock, table, format)?;
    lock.flush()?;
    Ok(())
}

/// Prints the unmodified samples to standard output.
pub fn print_raw(table: &Wavetable) -> Result<()> {
    print_table(table, Format::Raw)
}

/// Prints the samples rounded to integers to standard output.
pub fn print_truncated(table: &Wavetable) -> Result<()> {
    print_table(table, Format::Truncated)
}

/// Prints the rounded samples in hexadecimal to standard output.
pub fn print_hexadecimal(table: &Wavetable) -> Result<()> {
    print_table(table, Format::Hexadecimal)
}
