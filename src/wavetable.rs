//! The generated sample table.

use crate::error::{Result, WavetableError};
use std::ops::Deref;

/// One cycle of a waveform, sampled into a fixed-length table.
///
/// A `Wavetable` is immutable once built: it derefs to `[f64]` for reading
/// but exposes no way to modify the samples in place. Use
/// [`Wavetable::into_vec`] to take ownership of the underlying buffer.
///
/// # Examples
///
/// ```
/// use wavetab::{generate_bipolar, waveforms::square};
///
/// let table = generate_bipolar(square, 4, 7.0).unwrap();
/// assert_eq!(table.as_slice(), &[7.0, 7.0, -7.0, -7.0]);
/// assert_eq!(table.rounded().unwrap(), vec![7, 7, -7, -7]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Wavetable {
    samples: Vec<f64>,
}

impl Wavetable {
    /// Wraps already computed samples.
    ///
    /// Returns [`WavetableError::NonFinite`] if any sample is NaN or infinite.
    pub fn from_samples(samples: Vec<f64>) -> Result<Self> {
        if let Some((index, &value)) = samples.iter().enumerate().find(|(_, s)| !s.is_finite()) {
            return Err(WavetableError::NonFinite {
                index: Some(index),
                value,
            });
        }
        Ok(Self { samples })
    }

    /// Builds a table from samples the generator has already checked.
    pub(crate) fn from_checked(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    /// Number of samples in the table.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if the table holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples in generation order.
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Iterates over the samples in generation order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.samples.iter()
    }

    /// Consumes the table and returns the sample buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.samples
    }

    /// Rounds every sample to the nearest integer, ties to even.
    ///
    /// These are the values printed by the truncated and hexadecimal
    /// formats. Fails with [`WavetableError::NotRepresentable`] if a sample
    /// does not fit in an `i64`.
    pub fn rounded(&self) -> Result<Vec<i64>> {
        self.samples
            .iter()
            .enumerate()
            .map(|(index, &value)| round_sample(index, value))
            .collect()
    }
}

/// Rounds half to even and converts to `i64`, refusing values that would
/// saturate.
pub(crate) fn round_sample(index: usize, value: f64) -> Result<i64> {
    // 2^63 is exactly representable; anything at or past it would saturate.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;

    let rounded = value.round_ties_even();
    if !rounded.is_finite() || rounded >= LIMIT || rounded < -LIMIT {
        return Err(WavetableError::NotRepresentable { index, value });
    }
    Ok(rounded as i64)
}

impl Deref for Wavetable {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.samples
    }
}

impl AsRef<[f64]> for Wavetable {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

impl<'a> IntoIterator for &'a Wavetable {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl IntoIterator for Wavetable {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl TryFrom<Vec<f64>> for Wavetable {
    type Error = WavetableError;

    fn try_from(samples: Vec<f64>) -> Result<Self> {
        Wavetable::from_samples(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_samples_rejects_nan() {
        let result = Wavetable::from_samples(vec![0.0, 1.0, f64::NAN]);
        assert!(matches!(
            result,
            Err(WavetableError::NonFinite { index: Some(2), .. })
        ));
    }

    #[test]
    fn test_from_samples_rejects_infinity() {
        let result = Wavetable::try_from(vec![f64::NEG_INFINITY]);
        assert!(matches!(
            result,
            Err(WavetableError::NonFinite { index: Some(0), .. })
        ));
    }

    #[test]
    fn test_read_access() {
        let table = Wavetable::from_samples(vec![1.5, -2.0, 3.25]).unwrap();
        assert_eq!(table.len(), 3);
        assert!(!table.is_empty());
        assert_eq!(table[1], -2.0);
        assert_eq!(table.iter().copied().sum::<f64>(), 2.75);
        assert_eq!((&table).into_iter().count(), 3);
        assert_eq!(table.into_vec(), vec![1.5, -2.0, 3.25]);
    }

    #[test]
    fn test_empty_table() {
        let table = Wavetable::default();
        assert!(table.is_empty());
        assert_eq!(table.rounded().unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn test_rounding_ties_to_even() {
        let table = Wavetable::from_samples(vec![0.5, 1.5, 2.5, -0.5, -1.5, 2.4999, -0.0]).unwrap();
        assert_eq!(table.rounded().unwrap(), vec![0, 2, 2, 0, -2, 2, 0]);
    }

    #[test]
    fn test_rounding_out_of_range() {
        let table = Wavetable::from_samples(vec![1.0, 1e300]).unwrap();
        assert!(matches!(
            table.rounded(),
            Err(WavetableError::NotRepresentable { index: 1, .. })
        ));
        assert!(round_sample(0, -9.3e18).is_err());
        assert_eq!(round_sample(0, -9_223_372_036_854_775_808.0).unwrap(), i64::MIN);
    }

    #[test]
    fn test_round_sample_rejects_nan() {
        assert!(matches!(
            round_sample(4, f64::NAN),
            Err(WavetableError::NotRepresentable { index: 4, .. })
        ));
    }
}
