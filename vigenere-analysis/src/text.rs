//! Letter/residue handling and the Vigenère transformation itself

use crate::error::{AnalysisError, Result};

/// Number of letters in the alphabet
pub const ALPHABET_LEN: usize = 26;

/// Converts an uppercase letter to its residue (A=0 ... Z=25).
pub fn letter_to_residue(letter: char) -> Option<u8> {
    if letter.is_ascii_uppercase() {
        Some(letter as u8 - b'A')
    } else {
        None
    }
}

/// Converts a residue back to its uppercase letter.
///
/// Residues outside 0-25 are reduced modulo 26.
pub fn residue_to_letter(residue: u8) -> char {
    (b'A' + residue % ALPHABET_LEN as u8) as char
}

/// Subtracts `shift` from a residue, wrapping around the alphabet.
pub fn unshift(residue: u8, shift: u8) -> u8 {
    let n = ALPHABET_LEN as u8;
    (residue % n + n - shift % n) % n
}

/// Adds `shift` to a residue, wrapping around the alphabet.
pub fn shift_letter(residue: u8, shift: u8) -> u8 {
    let n = ALPHABET_LEN as u8;
    (residue % n + shift % n) % n
}

/// Cleans text by keeping only alphabetic characters and converting to uppercase
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// A validated, non-empty run of uppercase letters stored as residues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext {
    residues: Vec<u8>,
}

impl Ciphertext {
    /// Parses a ciphertext made only of the letters `A..=Z`.
    ///
    /// # Errors
    ///
    /// * [`AnalysisError::EmptyCiphertext`] if `text` is empty
    /// * [`AnalysisError::InvalidCharacter`] for the first character outside `A..=Z`
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(AnalysisError::EmptyCiphertext);
        }

        let residues = text
            .chars()
            .enumerate()
            .map(|(position, character)| {
                letter_to_residue(character)
                    .ok_or(AnalysisError::InvalidCharacter { character, position })
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self { residues })
    }

    pub fn residues(&self) -> &[u8] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

impl std::fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text: String = self.residues.iter().map(|&r| residue_to_letter(r)).collect();
        f.write_str(&text)
    }
}

fn key_shifts(key: &str) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(AnalysisError::InvalidKey("key cannot be empty".to_string()));
    }

    key.chars()
        .map(|c| {
            letter_to_residue(c)
                .ok_or_else(|| AnalysisError::InvalidKey(format!("{:?} is not in A-Z", c)))
        })
        .collect()
}

fn apply_key(text: &str, key: &str, op: fn(u8, u8) -> u8) -> Result<String> {
    let shifts = key_shifts(key)?;
    let input = Ciphertext::parse(text)?;

    Ok(input
        .residues()
        .iter()
        .zip(shifts.iter().cycle())
        .map(|(&residue, &shift)| residue_to_letter(op(residue, shift)))
        .collect())
}

/// Encrypts uppercase text using the Vigenère cipher algorithm.
///
/// # Arguments
///
/// * `plaintext` - Uppercase letters only.
/// * `key` - Non-empty uppercase key.
///
/// # Returns
///
/// The ciphertext, same length as `plaintext`.
pub fn encrypt(plaintext: &str, key: &str) -> Result<String> {
    apply_key(plaintext, key, shift_letter)
}

/// Decrypts uppercase text using the Vigenère cipher algorithm.
pub fn decrypt(ciphertext: &str, key: &str) -> Result<String> {
    apply_key(ciphertext, key, unshift)
}
