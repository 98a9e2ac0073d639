//! Rebuilding the plaintext and key from solved columns

use crate::text::residue_to_letter;

/// A successful recovery.
#[derive(Debug, Clone, PartialEq)]
pub struct Decryption {
    pub key_length: usize,
    pub key: String,
    pub plaintext: String,
    /// Winning score of each column, in key order
    pub scores: Vec<f64>,
}

/// Inverse of [`crate::column::partition`]: walks row by row, taking one
/// element from each column that still has one.
pub fn interleave<T: Copy>(columns: &[Vec<T>]) -> Vec<T> {
    let total: usize = columns.iter().map(Vec::len).sum();
    let mut result = Vec::with_capacity(total);
    let mut row = 0;

    while result.len() < total {
        for column in columns {
            if let Some(&item) = column.get(row) {
                result.push(item);
            }
        }
        row += 1;
    }

    result
}

/// Interleaves decrypted column strings back into the original character order.
///
/// `key_length` must equal `columns.len()`.
pub fn reassemble(columns: &[String], key_length: usize) -> String {
    debug_assert_eq!(columns.len(), key_length);

    let chars: Vec<Vec<char>> = columns.iter().map(|c| c.chars().collect()).collect();
    interleave(&chars).into_iter().collect()
}

/// Renders shifts as key letters (0 -> 'A', 1 -> 'B', ...).
pub fn render_key(shifts: &[u8]) -> String {
    shifts.iter().map(|&s| residue_to_letter(s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::partition;

    #[test]
    fn test_reassemble_uneven_columns() {
        let columns = vec!["ADG".to_string(), "BEH".to_string(), "CF".to_string()];
        assert_eq!(reassemble(&columns, 3), "ABCDEFGH");
    }

    #[test]
    fn test_interleave_inverts_partition() {
        let text: Vec<u8> = (0..37).map(|i| (i * 7 % 26) as u8).collect();
        for k in 1..text.len() {
            assert_eq!(interleave(&partition(&text, k)), text, "key length {}", k);
        }
    }

    #[test]
    fn test_render_key() {
        assert_eq!(render_key(&[11, 4, 12, 14, 13]), "LEMON");
        assert_eq!(render_key(&[]), "");
    }
}
