use crate::distribution::{
    Posterior, UnreachablePolicy, ciphertext_distribution, joint_distribution,
    posterior_distribution_with,
};
use crate::errors::BayesCipherError;
use crate::model::helper::{check_table, check_vector, is_permutation, total};
use crate::model::{CipherTable, Matrix, Vector};

use serde::Serialize;

/// Priors over plaintexts and keys together with the cipher table.
///
/// All three share the alphabet size `n`; the table is `n`×`n` and every cell
/// lies in `[0, n)`. Priors summing to 1 and rows being permutations are not
/// enforced, see [`CipherSystem::diagnostics`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CipherSystem {
    plaintext_priors: Vector,
    key_priors: Vector,
    table: CipherTable,
}

impl CipherSystem {
    /// Creates a new CipherSystem, checking shapes and table ranges.
    pub fn try_with(
        plaintext_priors: Vector,
        key_priors: Vector,
        table: CipherTable,
    ) -> Result<Self, BayesCipherError> {
        let n = plaintext_priors.len();
        if n == 0 {
            return Err(BayesCipherError::InvalidParameters(
                "Alphabet size must be > 0".to_string(),
            ));
        }

        check_vector("key priors", &key_priors, n)?;
        check_table(&table, n)?;

        for (name, priors) in [("plaintext", &plaintext_priors), ("key", &key_priors)] {
            if let Some((i, p)) = priors
                .iter()
                .enumerate()
                .find(|&(_, p)| !p.is_finite() || *p < 0.0)
            {
                return Err(BayesCipherError::InvalidParameters(format!(
                    "{} prior {} is {}, expected a non-negative number",
                    name, i, p
                )));
            }
        }

        Ok(Self::from_parts(plaintext_priors, key_priors, table))
    }

    pub(crate) fn from_parts(plaintext_priors: Vector, key_priors: Vector, table: CipherTable) -> Self {
        Self {
            plaintext_priors,
            key_priors,
            table,
        }
    }

    /// Alphabet size.
    pub fn n(&self) -> usize {
        self.plaintext_priors.len()
    }

    pub fn plaintext_priors(&self) -> &[f64] {
        &self.plaintext_priors
    }

    pub fn key_priors(&self) -> &[f64] {
        &self.key_priors
    }

    pub fn table(&self) -> &CipherTable {
        &self.table
    }

    /// Ciphertext produced by `plaintext` under `key`.
    pub fn encrypt(&self, key: usize, plaintext: usize) -> usize {
        self.table[key][plaintext]
    }

    /// Problems with the inputs that do not stop the computation.
    ///
    /// Reports priors whose sum is further than `tolerance` from 1 and table
    /// rows that are not permutations.
    pub fn diagnostics(&self, tolerance: f64) -> Vec<String> {
        let mut notes = Vec::new();
        let n = self.n();

        for (name, priors) in [("plaintext", &self.plaintext_priors), ("key", &self.key_priors)] {
            let sum = total(priors);
            if (sum - 1.0).abs() > tolerance {
                notes.push(format!("{} priors sum to {} instead of 1", name, sum));
            }
        }

        for (key, row) in self.table.iter().enumerate() {
            if !is_permutation(row, n) {
                notes.push(format!("cipher table row {} is not a permutation", key));
            }
        }

        notes
    }

    /// P(C), see [`ciphertext_distribution`].
    pub fn ciphertext_distribution(&self) -> Result<Vector, BayesCipherError> {
        ciphertext_distribution(&self.plaintext_priors, &self.key_priors, &self.table, self.n())
    }

    /// P(M, C), see [`joint_distribution`].
    pub fn joint_distribution(&self) -> Result<Matrix, BayesCipherError> {
        joint_distribution(&self.plaintext_priors, &self.key_priors, &self.table, self.n())
    }

    /// P(M | C) under the given policy for unreachable ciphertexts.
    pub fn posterior(&self, policy: UnreachablePolicy) -> Result<Posterior, BayesCipherError> {
        let joint = self.joint_distribution()?;
        let ciphertext = self.ciphertext_distribution()?;
        posterior_distribution_with(&joint, &ciphertext, self.n(), policy)
    }
}
