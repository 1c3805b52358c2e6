//! Wavetable generation.
//!
//! The generator samples a waveform function once per table slot across a
//! single cycle, optionally shifted by a phase offset in degrees, and scales
//! the result either around zero ([`Polarity::Bipolar`]) or from zero upward
//! ([`Polarity::Unipolar`]).
//!
//! Any `Fn(f64) -> f64` can be used as the waveform, so the built-in shapes,
//! [`Waveform::function`](crate::Waveform::function) and closures all work:
//!
//! ```
//! use wavetab::{generate_bipolar, generate_unipolar_with_phase, Waveform};
//!
//! let tri = generate_bipolar(Waveform::Triangle.function(), 16, 15.0).unwrap();
//! assert_eq!(tri.len(), 16);
//!
//! // A custom shape: half-rectified sine
//! let half = generate_bipolar(|p: f64| wavetab::waveforms::sine(p).max(0.0), 8, 1.0).unwrap();
//! assert!(half.iter().all(|&s| s >= 0.0));
//!
//! // Start a quarter cycle in
//! let shifted = generate_unipolar_with_phase(wavetab::waveforms::sine, 4, 2.0, 90.0).unwrap();
//! assert!((shifted[0] - 2.0).abs() < 1e-12);
//! ```

use crate::error::{Result, WavetableError};
use crate::wavetable::Wavetable;
use log::debug;
use std::fmt;

/// How the normalized waveform is mapped onto the output range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Polarity {
    /// Samples span `-depth..=depth`
    #[default]
    Bipolar,
    /// Samples span `0..=depth`
    Unipolar,
}

impl Polarity {
    /// Scales a normalized amplitude in `[-1.0, 1.0]` to this polarity.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavetab::Polarity;
    ///
    /// assert_eq!(Polarity::Bipolar.scale(-1.0, 15.0), -15.0);
    /// assert_eq!(Polarity::Unipolar.scale(-1.0, 15.0), 0.0);
    /// assert_eq!(Polarity::Unipolar.scale(0.0, 64.0), 32.0);
    /// ```
    pub fn scale(self, amplitude: f64, depth: f64) -> f64 {
        match self {
            Polarity::Bipolar => amplitude * depth,
            Polarity::Unipolar => (amplitude + 1.0) / 2.0 * depth,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Bipolar => f.write_str("bipolar"),
            Polarity::Unipolar => f.write_str("unipolar"),
        }
    }
}

/// Generates a table of `length` samples of one cycle of `waveform`.
///
/// Sample `i` is taken at phase `i / length + phase_degrees / 360` and scaled
/// by `depth` according to `polarity`. Phase offsets outside `0..360` are
/// allowed; the waveform wraps them. A `length` of zero gives an empty table,
/// and a negative `depth` inverts the waveform.
///
/// # Errors
///
/// Returns [`WavetableError::NonFinite`] if `depth` or `phase_degrees` is
/// not finite, or if `waveform` produces a NaN or infinite sample.
pub fn generate<F>(
    polarity: Polarity,
    waveform: F,
    length: usize,
    depth: f64,
    phase_degrees: f64,
) -> Result<Wavetable>
where
    F: Fn(f64) -> f64,
{
    for value in [depth, phase_degrees] {
        if !value.is_finite() {
            return Err(WavetableError::NonFinite { index: None, value });
        }
    }

    debug!(
        "generating {} wavetable: length={}, depth={}, phase={} deg",
        polarity, length, depth, phase_degrees
    );

    let offset = phase_degrees / 360.0;
    let samples = (0..length)
        .map(|i| {
            let phase = i as f64 / length as f64 + offset;
            let value = polarity.scale(waveform(phase), depth);
            if value.is_finite() {
                Ok(value)
            } else {
                Err(WavetableError::NonFinite {
                    index: Some(i),
                    value,
                })
            }
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(Wavetable::from_checked(samples))
}

/// Generates a table spanning `-depth..=depth`, starting at phase zero.
///
/// # Examples
///
/// ```
/// use wavetab::{generate_bipolar, waveforms::triangle};
///
/// // 16 samples of a triangle between -15 and 15
/// let table = generate_bipolar(triangle, 16, 15.0).unwrap();
/// assert_eq!(table.rounded().unwrap()[..5], [0_i64, 4, 8, 11, 15]);
/// ```
pub fn generate_bipolar<F>(waveform: F, length: usize, depth: f64) -> Result<Wavetable>
where
    F: Fn(f64) -> f64,
{
    generate(Polarity::Bipolar, waveform, length, depth, 0.0)
}

/// Generates a table spanning `-depth..=depth`, shifted by `phase_degrees`.
pub fn generate_bipolar_with_phase<F>(
    waveform: F,
    length: usize,
    depth: f64,
    phase_degrees: f64,
) -> Result<Wavetable>
where
    F: Fn(f64) -> f64,
{
    generate(Polarity::Bipolar, waveform, length, depth, phase_degrees)
}

/// Generates a table spanning `0..=depth`, starting at phase zero.
///
/// This is the usual choice for driving an unsigned DAC such as an R-2R
/// ladder, where `depth` is the full-scale code.
pub fn generate_unipolar<F>(waveform: F, length: usize, depth: f64) -> Result<Wavetable>
where
    F: Fn(f64) -> f64,
{
    generate(Polarity::Unipolar, waveform, length, depth, 0.0)
}

/// Generates a table spanning `0..=depth`, shifted by `phase_degrees`.
pub fn generate_unipolar_with_phase<F>(
    waveform: F,
    length: usize,
    depth: f64,
    phase_degrees: f64,
) -> Result<Wavetable>
where
    F: Fn(f64) -> f64,
{
    generate(Polarity::Unipolar, waveform, length, depth, phase_degrees)
}
