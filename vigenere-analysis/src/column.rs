//! Column partitioning and single-shift recovery

use tracing::debug;

use crate::frequency::FrequencyModel;
use crate::text::{residue_to_letter, unshift, ALPHABET_LEN};

/// A shift (0-25) together with the score its decryption reached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftCandidate {
    pub shift: u8,
    pub score: f64,
}

impl ShiftCandidate {
    /// Key letter for this shift (0 -> 'A', 1 -> 'B', ...)
    pub fn key_letter(&self) -> char {
        residue_to_letter(self.shift)
    }
}

/// Splits residues into `key_length` interleaved columns.
///
/// Column `o` holds the characters at positions `o, o + k, o + 2k, ...`.
///
/// # Panics
///
/// Panics if `key_length` is zero.
pub fn partition(residues: &[u8], key_length: usize) -> Vec<Vec<u8>> {
    assert!(key_length > 0, "key length must be positive");

    let mut columns = vec![Vec::with_capacity(residues.len() / key_length + 1); key_length];

    for (i, &residue) in residues.iter().enumerate() {
        columns[i % key_length].push(residue);
    }

    columns
}

/// Relative frequency of each residue in `column` after removing `shift`.
fn shifted_histogram(column: &[u8], shift: u8) -> [f64; ALPHABET_LEN] {
    let mut counts = [0u32; ALPHABET_LEN];
    for &residue in column {
        counts[unshift(residue, shift) as usize] += 1;
    }

    let total = column.len() as f64;
    counts.map(|count| count as f64 / total)
}

/// Finds the Caesar shift of a single column by frequency matching.
#[derive(Debug, Clone, Copy)]
pub struct ColumnShiftSolver<'a> {
    model: &'a FrequencyModel,
}

impl<'a> ColumnShiftSolver<'a> {
    pub fn new(model: &'a FrequencyModel) -> Self {
        Self { model }
    }

    /// Score of `column` decrypted under `shift`.
    pub fn score_shift(&self, column: &[u8], shift: u8) -> f64 {
        if column.is_empty() {
            return 0.0;
        }
        self.model.score(&shifted_histogram(column, shift))
    }

    /// Best shift whose score is strictly above the model threshold.
    ///
    /// Shifts are tried in ascending order and only a strictly better score
    /// replaces the current best, so the lowest shift wins a tie. Returns
    /// `None` when no shift clears the threshold.
    pub fn solve(&self, column: &[u8]) -> Option<ShiftCandidate> {
        let mut best: Option<ShiftCandidate> = None;

        for shift in 0..ALPHABET_LEN as u8 {
            let score = self.score_shift(column, shift);

            if score <= self.model.threshold() {
                continue;
            }
            if best.map_or(true, |b| score > b.score) {
                best = Some(ShiftCandidate { shift, score });
            }
        }

        debug!(
            column_len = column.len(),
            shift = best.map(|b| b.shift),
            score = best.map(|b| b.score),
            "solved column"
        );

        best
    }
}
