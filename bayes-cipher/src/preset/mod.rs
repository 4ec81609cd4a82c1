//! Built-in demonstration inputs.

use crate::errors::BayesCipherError;
use crate::model::{CipherSystem, CipherTable, DEFAULT_ALPHABET_SIZE, Vector};

use lazy_static::lazy_static;

lazy_static! {
    /// Shift cipher over the default alphabet, see [`shift_system`].
    pub static ref DEMO: CipherSystem = {
        let (plaintext, key, table) = shift_parts(DEFAULT_ALPHABET_SIZE);
        CipherSystem::from_parts(plaintext, key, table)
    };
}

fn normalized(weights: Vec<f64>) -> Vector {
    let sum: f64 = weights.iter().sum();
    weights.into_iter().map(|w| w / sum).collect()
}

fn shift_parts(n: usize) -> (Vector, Vector, CipherTable) {
    // Zipf-like plaintexts, keys weighted towards small shifts
    let plaintext = normalized((0..n).map(|m| 1.0 / (m + 1) as f64).collect());
    let key = normalized((0..n).map(|k| (n - k) as f64).collect());
    let table = (0..n)
        .map(|k| (0..n).map(|m| (m + k) % n).collect())
        .collect();
    (plaintext, key, table)
}

/// Shift cipher `table[k][m] = (m + k) mod n` with skewed priors.
///
/// # Errors
///
/// Returns `BayesCipherError::InvalidParameters` if `n` is 0.
pub fn shift_system(n: usize) -> Result<CipherSystem, BayesCipherError> {
    if n == 0 {
        return Err(BayesCipherError::InvalidParameters(
            "Alphabet size must be > 0".to_string(),
        ));
    }
    let (plaintext, key, table) = shift_parts(n);
    CipherSystem::try_with(plaintext, key, table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_is_well_formed() {
        assert_eq!(DEMO.n(), DEFAULT_ALPHABET_SIZE);
        assert!(DEMO.diagnostics(1e-9).is_empty());
        assert_eq!(DEMO.encrypt(3, 18), 1);
    }

    #[test]
    fn test_shift_system_matches_demo() {
        assert_eq!(shift_system(DEFAULT_ALPHABET_SIZE).unwrap(), *DEMO);
        assert!(shift_system(0).is_err());
    }
}
