//! # Distribution
//!
//! P(C), P(M, C) and P(M | C) for a table cipher.
//!
//! Every function takes the raw tables plus the shared alphabet size `n` and
//! checks shapes before touching any index.

use crate::errors::BayesCipherError;
use crate::model::helper::{check_matrix, check_table, check_vector};
use crate::model::{Matrix, Vector};

use itertools::iproduct;
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// What to do with a ciphertext `c` for which P(C = c) = 0.
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnreachablePolicy {
    /// Fail with [`BayesCipherError::UnreachableCiphertext`].
    #[default]
    Fail,
    /// Define the whole posterior column as 0 and record its index.
    Zero,
}

impl fmt::Display for UnreachablePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnreachablePolicy::Fail => write!(f, "fail"),
            UnreachablePolicy::Zero => write!(f, "zero"),
        }
    }
}

impl FromStr for UnreachablePolicy {
    type Err = BayesCipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fail" => Ok(UnreachablePolicy::Fail),
            "zero" => Ok(UnreachablePolicy::Zero),
            other => Err(BayesCipherError::InvalidParameters(format!(
                "unknown unreachable policy '{}', expected 'fail' or 'zero'",
                other
            ))),
        }
    }
}

/// P(M | C) together with the columns that had to be filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posterior {
    /// `probs[m][c]` = P(M = m | C = c).
    pub probs: Matrix,
    /// Ciphertexts with P(C = c) = 0, ascending. Their columns are all zero.
    pub unreachable: Vec<usize>,
}

impl Posterior {
    pub fn is_reachable(&self, ciphertext: usize) -> bool {
        self.unreachable.binary_search(&ciphertext).is_err()
    }
}

fn check_inputs(
    plaintext_priors: &[f64],
    key_priors: &[f64],
    table: &[Vec<usize>],
    n: usize,
) -> Result<(), BayesCipherError> {
    check_vector("plaintext priors", plaintext_priors, n)?;
    check_vector("key priors", key_priors, n)?;
    check_table(table, n)
}

/// Computes P(C = c) = Σ P(K = k)·P(M = m) over all (k, m) with `table[k][m] = c`.
///
/// The result sums to 1 whenever both priors do; no normalization is applied.
///
/// # Errors
///
/// Returns `BayesCipherError::DimensionMismatch` if an input does not match `n`
/// and `BayesCipherError::TableEntryOutOfRange` for a table cell outside `[0, n)`.
pub fn ciphertext_distribution(
    plaintext_priors: &[f64],
    key_priors: &[f64],
    table: &[Vec<usize>],
    n: usize,
) -> Result<Vector, BayesCipherError> {
    check_inputs(plaintext_priors, key_priors, table, n)?;

    let mut ciphertext = vec![0.0; n];
    for (m, k) in iproduct!(0..n, 0..n) {
        ciphertext[table[k][m]] += key_priors[k] * plaintext_priors[m];
    }
    Ok(ciphertext)
}

/// Computes P(M = m, C = c) = Σ P(K = k)·P(M = m) over all k with `table[k][m] = c`.
///
/// The result is indexed `joint[m][c]`.
///
/// # Errors
///
/// Same as [`ciphertext_distribution`].
pub fn joint_distribution(
    plaintext_priors: &[f64],
    key_priors: &[f64],
    table: &[Vec<usize>],
    n: usize,
) -> Result<Matrix, BayesCipherError> {
    check_inputs(plaintext_priors, key_priors, table, n)?;

    let mut joint = vec![vec![0.0; n]; n];
    for (m, k) in iproduct!(0..n, 0..n) {
        joint[m][table[k][m]] += key_priors[k] * plaintext_priors[m];
    }
    Ok(joint)
}

/// Computes P(M = m | C = c) = P(M = m, C = c) / P(C = c).
///
/// # Errors
///
/// Returns `BayesCipherError::UnreachableCiphertext` for the first `c` with
/// P(C = c) = 0, and `BayesCipherError::DimensionMismatch` on shape errors.
pub fn posterior_distribution(
    joint: &[Vec<f64>],
    ciphertext: &[f64],
    n: usize,
) -> Result<Matrix, BayesCipherError> {
    posterior_distribution_with(joint, ciphertext, n, UnreachablePolicy::Fail)
        .map(|posterior| posterior.probs)
}

/// Same as [`posterior_distribution`] but with an explicit policy for
/// unreachable ciphertexts.
pub fn posterior_distribution_with(
    joint: &[Vec<f64>],
    ciphertext: &[f64],
    n: usize,
    policy: UnreachablePolicy,
) -> Result<Posterior, BayesCipherError> {
    check_matrix("joint distribution", joint, n)?;
    check_vector("ciphertext distribution", ciphertext, n)?;

    let mut probs = vec![vec![0.0; n]; n];
    let mut unreachable = Vec::new();

    for (c, &p_c) in ciphertext.iter().enumerate() {
        // NaN lands here too
        if !(p_c > 0.0) {
            match policy {
                UnreachablePolicy::Fail => {
                    return Err(BayesCipherError::UnreachableCiphertext { ciphertext: c });
                }
                UnreachablePolicy::Zero => {
                    log::debug!("ciphertext {} is unreachable, posterior column set to 0", c);
                    unreachable.push(c);
                    continue;
                }
            }
        }
        for m in 0..n {
            probs[m][c] = joint[m][c] / p_c;
        }
    }

    Ok(Posterior { probs, unreachable })
}
