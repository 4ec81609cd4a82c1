//! # Decision
//!
//! Bayes decision rules built from a posterior matrix `posterior[m][c]`.
//!
//! Both rules pick the plaintexts with the largest posterior in each column.
//! They differ only in how ties are handled: the deterministic rule keeps the
//! lowest index, the stochastic rule spreads probability uniformly over all
//! tied indices.

use crate::errors::BayesCipherError;
use crate::model::helper::check_matrix;
use crate::model::{Matrix, Rule};

/// Indices `m` reaching the maximum of column `c`, ascending.
///
/// A strictly greater value restarts the set, an equal value extends it.
fn column_argmax(posterior: &[Vec<f64>], c: usize, n: usize) -> Vec<usize> {
    let mut best_value = f64::NEG_INFINITY;
    let mut ties = Vec::new();
    for m in 0..n {
        let value = posterior[m][c];
        if value > best_value {
            best_value = value;
            ties.clear();
            ties.push(m);
        } else if value == best_value {
            ties.push(m);
        }
    }
    ties
}

/// Returns the tie set used by [`stochastic_bayes`] for ciphertext `c`.
///
/// # Errors
///
/// Returns `BayesCipherError::DimensionMismatch` if `posterior` is not `n`×`n`
/// or `c >= n`, and `BayesCipherError::InvalidParameters` if the column holds
/// no comparable value.
pub fn argmax_set(posterior: &[Vec<f64>], c: usize, n: usize) -> Result<Vec<usize>, BayesCipherError> {
    check_matrix("posterior distribution", posterior, n)?;
    if c >= n {
        return Err(BayesCipherError::DimensionMismatch(format!(
            "ciphertext {} is outside the alphabet of size {}",
            c, n
        )));
    }
    non_empty_argmax(posterior, c, n)
}

fn non_empty_argmax(posterior: &[Vec<f64>], c: usize, n: usize) -> Result<Vec<usize>, BayesCipherError> {
    let ties = column_argmax(posterior, c, n);
    if ties.is_empty() {
        return Err(BayesCipherError::InvalidParameters(format!(
            "posterior column {} has no comparable value",
            c
        )));
    }
    Ok(ties)
}

/// Deterministic Bayes rule δ_B: `rule[c]` is the first `m` with the largest
/// `posterior[m][c]`.
///
/// Only a strictly greater value replaces the current choice, so among equal
/// maxima the lowest index wins.
pub fn deterministic_bayes(posterior: &[Vec<f64>], n: usize) -> Result<Rule, BayesCipherError> {
    check_matrix("posterior distribution", posterior, n)?;

    let mut rule = vec![0; n];
    for (c, choice) in rule.iter_mut().enumerate() {
        let mut best_value = f64::NEG_INFINITY;
        for m in 0..n {
            if posterior[m][c] > best_value {
                best_value = posterior[m][c];
                *choice = m;
            }
        }
    }
    Ok(rule)
}

/// Stochastic Bayes rule δ_S: row `c` is uniform over the argmax set of
/// column `c` and zero elsewhere.
pub fn stochastic_bayes(posterior: &[Vec<f64>], n: usize) -> Result<Matrix, BayesCipherError> {
    check_matrix("posterior distribution", posterior, n)?;

    let mut rule = vec![vec![0.0; n]; n];
    for (c, row) in rule.iter_mut().enumerate() {
        let ties = non_empty_argmax(posterior, c, n)?;
        let weight = 1.0 / ties.len() as f64;
        for m in ties {
            row[m] = weight;
        }
    }
    Ok(rule)
}
