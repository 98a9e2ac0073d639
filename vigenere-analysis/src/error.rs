//! Error types for Vigenère analysis operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error("Ciphertext is empty")]
    EmptyCiphertext,

    #[error("Invalid character {character:?} at position {position} (only A-Z allowed)")]
    InvalidCharacter { character: char, position: usize },

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid threshold {0} (must be a finite number)")]
    InvalidThreshold(f64),

    #[error("Invalid key length {key_length} (must be between 1 and {text_length} exclusive)")]
    InvalidKeyLength { key_length: usize, text_length: usize },
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
