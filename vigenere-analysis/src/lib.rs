//! # Vigenère Analysis Library
//!
//! Ciphertext-only cryptanalysis of the Vigenère cipher by letter-frequency
//! matching. Given only an uppercase ciphertext it recovers the key length,
//! the key and the plaintext.
//!
//! ## How it works
//!
//! - **Key length search** - key lengths 1, 2, 3, ... are tried in order and the
//!   first one for which every column resolves is accepted
//! - **Column solving** - each column is a Caesar cipher; every shift is scored
//!   by the dot product of its letter frequencies with English frequencies and
//!   the best shift above a fixed floor wins
//! - **Reassembly** - decrypted columns are interleaved back into the original order
//!
//! ## Usage
//!
//! ```rust
//! use vigenere_analysis::{break_cipher, encrypt};
//!
//! let ciphertext = encrypt("ITWASTHEBESTOFTIMESITWASTHEWORSTOFTIMES", "D")?;
//! let (plaintext, key) = break_cipher(&ciphertext)?;
//!
//! assert_eq!(key, "D");
//! assert_eq!(plaintext, "ITWASTHEBESTOFTIMESITWASTHEWORSTOFTIMES");
//! # Ok::<(), vigenere_analysis::AnalysisError>(())
//! ```

// Public modules
pub mod column;
pub mod error;
pub mod frequency;
pub mod reassemble;
pub mod search;
pub mod text;

// Re-exports for easy access
pub use column::{ColumnShiftSolver, ShiftCandidate};
pub use error::{AnalysisError, Result};
pub use frequency::FrequencyModel;
pub use reassemble::Decryption;
pub use search::{KeyAttempt, KeyLengthSearch};
pub use text::{decrypt, encrypt, normalize, Ciphertext};

/// Plaintext reported when no key length resolves
pub const NO_MESSAGE: &str = "No decrypted message found.";

/// Key reported when no key length resolves
pub const NO_KEY: &str = "No key.";

/// Recovers `(plaintext, key)` from an uppercase ciphertext with the default
/// English model.
///
/// Finding no plausible key is not an error: the pair
/// ([`NO_MESSAGE`], [`NO_KEY`]) is returned instead.
///
/// # Errors
///
/// Fails only if `ciphertext` is empty or contains anything other than `A-Z`.
pub fn break_cipher(ciphertext: &str) -> Result<(String, String)> {
    let ciphertext = Ciphertext::parse(ciphertext)?;

    Ok(match KeyLengthSearch::default().search(&ciphertext) {
        Some(found) => (found.plaintext, found.key),
        None => (NO_MESSAGE.to_string(), NO_KEY.to_string()),
    })
}
