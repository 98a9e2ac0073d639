//! Reference letter frequencies and the acceptance threshold

use crate::error::{AnalysisError, Result};
use crate::text::ALPHABET_LEN;

/// English letter frequencies for frequency analysis
pub const ENGLISH_FREQUENCIES: [f64; ALPHABET_LEN] = [
    0.082, 0.015, 0.028, 0.042, 0.127, 0.022, 0.020, 0.061, 0.070,
    0.001, 0.008, 0.040, 0.024, 0.067, 0.075, 0.019, 0.001, 0.060,
    0.063, 0.090, 0.028, 0.010, 0.024, 0.020, 0.001, 0.001,
];

/// Minimum score a shift must exceed to be accepted.
///
/// Sits below the ~0.065 a frequency vector scores against itself, which leaves
/// room for noise in short columns.
pub const DEFAULT_THRESHOLD: f64 = 0.053;

/// Immutable frequency table plus acceptance threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyModel {
    frequencies: [f64; ALPHABET_LEN],
    threshold: f64,
}

impl FrequencyModel {
    /// # Errors
    ///
    /// [`AnalysisError::InvalidThreshold`] if `threshold` is NaN or infinite.
    pub fn new(frequencies: [f64; ALPHABET_LEN], threshold: f64) -> Result<Self> {
        Self { frequencies, threshold: 0.0 }.with_threshold(threshold)
    }

    pub fn english() -> Self {
        Self { frequencies: ENGLISH_FREQUENCIES, threshold: DEFAULT_THRESHOLD }
    }

    /// Same table, different acceptance threshold
    pub fn with_threshold(mut self, threshold: f64) -> Result<Self> {
        if !threshold.is_finite() {
            return Err(AnalysisError::InvalidThreshold(threshold));
        }
        self.threshold = threshold;
        Ok(self)
    }

    /// Expected relative frequency of letter `index` (A=0 ... Z=25).
    ///
    /// # Panics
    ///
    /// Panics if `index >= 26`.
    pub fn expected_frequency(&self, index: usize) -> f64 {
        self.frequencies[index]
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Dot product of an observed relative-frequency vector with the table.
    pub fn score(&self, observed: &[f64; ALPHABET_LEN]) -> f64 {
        observed
            .iter()
            .zip(self.frequencies.iter())
            .map(|(o, e)| o * e)
            .sum()
    }
}

impl Default for FrequencyModel {
    fn default() -> Self {
        Self::english()
    }
}
