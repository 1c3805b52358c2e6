//! Periodic waveform functions.
//!
//! Every function here maps a phase to an amplitude in `[-1.0, 1.0]`. A phase
//! of `0.0` is the start of a cycle and `1.0` wraps back around to `0.0`, so
//! any real phase is accepted and wrapped with a floored modulo before use.
//!
//! All five shapes are in phase with one another: at phase `0.0` the sine,
//! triangle and sawtooth sit at zero and are rising, and at phase `0.25` the
//! sine and triangle reach their peak. The square wave steps from `1.0` to
//! `-1.0` at phase `0.5`, the same point where the sine crosses zero falling.
//!
//! ```
//! use wavetab::waveforms::{sine, triangle, Waveform};
//!
//! assert_eq!(triangle(0.25), 1.0);
//! assert!((sine(0.25) - 1.0).abs() < 1e-12);
//! assert_eq!(Waveform::Triangle.sample(1.25), triangle(0.25));
//! ```

use crate::error::WavetableError;
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

/// Sine wave.
pub fn sine(phase: f64) -> f64 {
    (phase * TAU).sin()
}

/// Triangle wave, rising through zero at phase `0.0`.
pub fn triangle(phase: f64) -> f64 {
    (((phase + 0.75) * 4.0).rem_euclid(4.0) - 2.0).abs() - 1.0
}

/// Forward facing sawtooth wave.
///
/// Rises linearly through zero at phase `0.0` and jumps from `1.0` down to
/// `-1.0` at phase `0.5`.
pub fn sawtooth(phase: f64) -> f64 {
    (phase + 0.5).rem_euclid(1.0) * 2.0 - 1.0
}

/// Backwards facing sawtooth wave.
///
/// Starts at `1.0` on phase `0.0` and falls linearly across the cycle.
pub fn wastooth(phase: f64) -> f64 {
    (1.0 - phase.rem_euclid(1.0)) * 2.0 - 1.0
}

/// Square wave, high for the first half of the cycle.
pub fn square(phase: f64) -> f64 {
    if phase.rem_euclid(1.0) < 0.5 { 1.0 } else { -1.0 }
}

/// The built-in waveform shapes.
///
/// `Waveform` is a small tag that resolves to one of the plain functions in
/// this module, so it can be stored, parsed from a name, or passed straight
/// to the generator through [`Waveform::function`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
    Wastooth,
    Square,
}

impl Waveform {
    /// Every waveform, in declaration order.
    pub const ALL: [Waveform; 5] = [
        Waveform::Sine,
        Waveform::Triangle,
        Waveform::Sawtooth,
        Waveform::Wastooth,
        Waveform::Square,
    ];

    /// Returns the function that computes this waveform.
    ///
    /// # Examples
    ///
    /// ```
    /// use wavetab::waveforms::Waveform;
    ///
    /// let f = Waveform::Square.function();
    /// assert_eq!(f(0.1), 1.0);
    /// assert_eq!(f(0.6), -1.0);
    /// ```
    pub fn function(self) -> fn(f64) -> f64 {
        match self {
            Waveform::Sine => sine,
            Waveform::Triangle => triangle,
            Waveform::Sawtooth => sawtooth,
            Waveform::Wastooth => wastooth,
            Waveform::Square => square,
        }
    }

    /// Evaluates this waveform at `phase`.
    pub fn sample(self, phase: f64) -> f64 {
        (self.function())(phase)
    }

    /// Lower-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Triangle => "triangle",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Wastooth => "wastooth",
            Waveform::Square => "square",
        }
    }
}

impl fmt::Display for Waveform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Waveform {
    type Err = WavetableError;

    /// Parses a waveform name, ignoring case.
    ///
    /// Besides the canonical names a few common aliases are accepted, e.g.
    /// `saw`, `ramp-down` or `pulse`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sine" | "sin" => Ok(Waveform::Sine),
            "triangle" | "tri" => Ok(Waveform::Triangle),
            "sawtooth" | "saw" | "ramp-up" => Ok(Waveform::Sawtooth),
            "wastooth" | "reverse-sawtooth" | "ramp-down" => Ok(Waveform::Wastooth),
            "square" | "pulse" => Ok(Waveform::Square),
            _ => Err(WavetableError::UnknownWaveform(s.to_string())),
        }
    }
}
