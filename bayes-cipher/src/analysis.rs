//! One-shot pipeline from a [`CipherSystem`] to both decision rules and their losses.

use crate::decision::{deterministic_bayes, stochastic_bayes};
use crate::distribution::{
    UnreachablePolicy, ciphertext_distribution, joint_distribution, posterior_distribution_with,
};
use crate::errors::BayesCipherError;
use crate::loss::{average_loss_deterministic, average_loss_stochastic};
use crate::model::{CipherSystem, Matrix, Rule, Vector};

use serde::{Deserialize, Serialize};

/// Default tolerance for the "priors sum to 1" check.
pub const DEFAULT_PRIOR_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Handling of ciphertexts with P(C = c) = 0.
    pub unreachable: UnreachablePolicy,
    /// Allowed distance of each prior sum from 1 before a warning is logged.
    pub prior_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            unreachable: UnreachablePolicy::Fail,
            prior_tolerance: DEFAULT_PRIOR_TOLERANCE,
        }
    }
}

/// Every derived quantity for one cipher system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub n: usize,
    /// P(C).
    pub ciphertext: Vector,
    /// P(M, C), indexed `[m][c]`.
    pub joint: Matrix,
    /// P(M | C), indexed `[m][c]`.
    pub posterior: Matrix,
    /// Ciphertexts whose posterior column was zero-filled.
    pub unreachable: Vec<usize>,
    /// δ_B, indexed `[c]`.
    pub deterministic_rule: Rule,
    /// δ_S, indexed `[c][m]`.
    pub stochastic_rule: Matrix,
    pub deterministic_loss: f64,
    pub stochastic_loss: f64,
}

impl Analysis {
    pub fn run(system: &CipherSystem, config: &AnalysisConfig) -> Result<Self, BayesCipherError> {
        for note in system.diagnostics(config.prior_tolerance) {
            log::warn!("{}", note);
        }

        let n = system.n();
        let (pt, key, table) = (system.plaintext_priors(), system.key_priors(), system.table());

        let ciphertext = ciphertext_distribution(pt, key, table, n)?;
        let joint = joint_distribution(pt, key, table, n)?;
        log::debug!("computed P(C) and P(M,C) for n = {}", n);

        let posterior = posterior_distribution_with(&joint, &ciphertext, n, config.unreachable)?;
        if !posterior.unreachable.is_empty() {
            log::warn!(
                "{} unreachable ciphertext(s), posterior columns zero-filled: {:?}",
                posterior.unreachable.len(),
                posterior.unreachable
            );
        }

        let deterministic_rule = deterministic_bayes(&posterior.probs, n)?;
        let stochastic_rule = stochastic_bayes(&posterior.probs, n)?;
        log::debug!("decision rules ready, delta_B = {:?}", deterministic_rule);

        let deterministic_loss = average_loss_deterministic(&joint, &deterministic_rule, n)?;
        let stochastic_loss = average_loss_stochastic(&joint, &stochastic_rule, n)?;
        log::debug!(
            "loss(delta_B) = {:.6}, loss(delta_S) = {:.6}",
            deterministic_loss,
            stochastic_loss
        );

        Ok(Self {
            n,
            ciphertext,
            joint,
            posterior: posterior.probs,
            unreachable: posterior.unreachable,
            deterministic_rule,
            stochastic_rule,
            deterministic_loss,
            stochastic_loss,
        })
    }

    pub fn to_json(&self) -> Result<String, BayesCipherError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, BayesCipherError> {
        Ok(serde_json::from_str(json)?)
    }
}
