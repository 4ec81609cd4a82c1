//! # Loss
//!
//! Expected 0-1 loss of a decision rule, read straight off the joint
//! distribution. Only the mass on the pairs a rule actually decodes correctly
//! is summed, so no loss matrix is ever built.

use crate::errors::BayesCipherError;
use crate::model::helper::check_matrix;

/// Checks that `rule` has one entry per ciphertext and every entry is in `[0, n)`.
pub fn check_rule(rule: &[usize], n: usize) -> Result<(), BayesCipherError> {
    if rule.len() != n {
        return Err(BayesCipherError::DimensionMismatch(format!(
            "deterministic rule has length {} but expected {}",
            rule.len(),
            n
        )));
    }
    if let Some((ciphertext, &value)) = rule.iter().enumerate().find(|&(_, &m)| m >= n) {
        return Err(BayesCipherError::RuleEntryOutOfRange { ciphertext, value, n });
    }
    Ok(())
}

/// Expected 0-1 loss of a deterministic rule: `1 − Σ_c joint[rule[c]][c]`.
pub fn average_loss_deterministic(
    joint: &[Vec<f64>],
    rule: &[usize],
    n: usize,
) -> Result<f64, BayesCipherError> {
    check_matrix("joint distribution", joint, n)?;
    check_rule(rule, n)?;

    let correct: f64 = rule.iter().enumerate().map(|(c, &m)| joint[m][c]).sum();
    Ok(1.0 - correct)
}

/// Expected 0-1 loss of a stochastic rule: `1 − Σ_{m,c} joint[m][c]·rule[c][m]`.
pub fn average_loss_stochastic(
    joint: &[Vec<f64>],
    rule: &[Vec<f64>],
    n: usize,
) -> Result<f64, BayesCipherError> {
    check_matrix("joint distribution", joint, n)?;
    check_matrix("stochastic rule", rule, n)?;

    let mut correct = 0.0;
    for (m, joint_row) in joint.iter().enumerate() {
        for (c, &p) in joint_row.iter().enumerate() {
            correct += p * rule[c][m];
        }
    }
    Ok(1.0 - correct)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_deterministic_loss_uniform_joint() {
        let joint = vec![vec![0.25, 0.25], vec![0.25, 0.25]];
        let loss = average_loss_deterministic(&joint, &[0, 0], 2).unwrap();
        assert!((loss - 0.5).abs() < EPS);
    }

    #[test]
    fn test_deterministic_loss_perfect_decoding() {
        let joint = vec![vec![0.7, 0.0], vec![0.0, 0.3]];
        let loss = average_loss_deterministic(&joint, &[0, 1], 2).unwrap();
        assert!(loss.abs() < EPS);
        let loss = average_loss_deterministic(&joint, &[1, 0], 2).unwrap();
        assert!((loss - 1.0).abs() < EPS);
    }

    #[test]
    fn test_stochastic_loss_matches_deterministic_without_ties() {
        let joint = vec![vec![0.4, 0.1], vec![0.2, 0.3]];
        let deterministic = average_loss_deterministic(&joint, &[0, 1], 2).unwrap();
        let stochastic_rule = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
        let stochastic = average_loss_stochastic(&joint, &stochastic_rule, 2).unwrap();
        assert!((deterministic - stochastic).abs() < EPS);
        assert!((deterministic - 0.3).abs() < EPS);
    }

    #[test]
    fn test_stochastic_loss_split() {
        let joint = vec![vec![0.25, 0.25], vec![0.25, 0.25]];
        let rule = vec![vec![0.5, 0.5], vec![0.5, 0.5]];
        let loss = average_loss_stochastic(&joint, &rule, 2).unwrap();
        assert!((loss - 0.5).abs() < EPS);
    }

    #[test]
    fn test_rule_out_of_range() {
        let joint = vec![vec![0.25, 0.25], vec![0.25, 0.25]];
        assert!(matches!(
            average_loss_deterministic(&joint, &[0, 2], 2),
            Err(BayesCipherError::RuleEntryOutOfRange {
                ciphertext: 1,
                value: 2,
                n: 2
            })
        ));
        assert!(matches!(
            average_loss_deterministic(&joint, &[0], 2),
            Err(BayesCipherError::DimensionMismatch(_))
        ));
    }
}
