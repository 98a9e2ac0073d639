//! First-fit key length search

use tracing::{debug, info};

use crate::column::{partition, ColumnShiftSolver, ShiftCandidate};
use crate::error::{AnalysisError, Result};
use crate::frequency::FrequencyModel;
use crate::reassemble::{reassemble, render_key, Decryption};
use crate::text::{residue_to_letter, unshift, Ciphertext};

/// One candidate key length and the outcome of solving each of its columns.
#[derive(Debug, Clone)]
pub struct KeyAttempt {
    key_length: usize,
    columns: Vec<Vec<u8>>,
    outcomes: Vec<Option<ShiftCandidate>>,
}

impl KeyAttempt {
    pub fn key_length(&self) -> usize {
        self.key_length
    }

    /// Per-column outcome; `None` marks an unresolved column
    pub fn outcomes(&self) -> &[Option<ShiftCandidate>] {
        &self.outcomes
    }

    /// True iff every column resolved
    pub fn is_successful(&self) -> bool {
        self.outcomes.iter().all(Option::is_some)
    }

    pub fn unresolved(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_none()).count()
    }

    /// The shift of every column, or `None` if any column is unresolved.
    pub fn shifts(&self) -> Option<Vec<u8>> {
        self.outcomes.iter().map(|o| o.map(|c| c.shift)).collect()
    }

    /// Decrypts each column with its shift and reassembles the plaintext.
    pub fn into_decryption(self) -> Option<Decryption> {
        let shifts = self.shifts()?;

        let decrypted: Vec<String> = self
            .columns
            .iter()
            .zip(shifts.iter())
            .map(|(column, &shift)| {
                column.iter().map(|&r| residue_to_letter(unshift(r, shift))).collect()
            })
            .collect();

        Some(Decryption {
            key_length: self.key_length,
            key: render_key(&shifts),
            plaintext: reassemble(&decrypted, self.key_length),
            scores: self.outcomes.iter().flatten().map(|c| c.score).collect(),
        })
    }
}

/// Tries key lengths 1, 2, 3, ... and accepts the first one for which every
/// column resolves.
#[derive(Debug, Clone, Default)]
pub struct KeyLengthSearch {
    model: FrequencyModel,
    max_key_length: Option<usize>,
}

impl KeyLengthSearch {
    pub fn new(model: FrequencyModel) -> Self {
        Self { model, max_key_length: None }
    }

    /// Caps the search; key lengths are still limited to `len - 1`.
    pub fn with_max_key_length(mut self, max_key_length: usize) -> Self {
        self.max_key_length = Some(max_key_length);
        self
    }

    pub fn model(&self) -> &FrequencyModel {
        &self.model
    }

    /// Largest key length tried for a text of `text_length` letters.
    pub fn key_length_bound(&self, text_length: usize) -> usize {
        let bound = text_length.saturating_sub(1);
        self.max_key_length.map_or(bound, |max| max.min(bound))
    }

    /// Solves every column for a single key length.
    ///
    /// # Panics
    ///
    /// Panics if `key_length` is zero.
    pub fn attempt(&self, ciphertext: &Ciphertext, key_length: usize) -> KeyAttempt {
        let solver = ColumnShiftSolver::new(&self.model);
        let columns = partition(ciphertext.residues(), key_length);
        let outcomes = columns.iter().map(|column| solver.solve(column)).collect();

        KeyAttempt { key_length, columns, outcomes }
    }

    /// Smallest key length whose columns all clear the threshold, with the
    /// resulting key and plaintext. `None` when no key length in
    /// `1..len` works.
    pub fn search(&self, ciphertext: &Ciphertext) -> Option<Decryption> {
        let bound = self.key_length_bound(ciphertext.len());

        for key_length in 1..=bound {
            let attempt = self.attempt(ciphertext, key_length);

            if attempt.is_successful() {
                info!(key_length, "all columns resolved");
                return attempt.into_decryption();
            }

            debug!(key_length, unresolved = attempt.unresolved(), "rejected key length");
        }

        info!(text_length = ciphertext.len(), bound, "no key length resolved");
        None
    }

    /// Like [`search`](Self::search) but only tries `key_length`.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::InvalidKeyLength`] unless `1 <= key_length < len`.
    pub fn search_with_key_length(
        &self,
        ciphertext: &Ciphertext,
        key_length: usize,
    ) -> Result<Option<Decryption>> {
        if key_length == 0 || key_length >= ciphertext.len() {
            return Err(AnalysisError::InvalidKeyLength {
                key_length,
                text_length: ciphertext.len(),
            });
        }

        Ok(self.attempt(ciphertext, key_length).into_decryption())
    }
}
