//! Monte Carlo estimate of a decision rule's error rate.
//!
//! Draws (plaintext, key) pairs from the priors, encrypts them with the cipher
//! table and counts how often the rule decodes a different plaintext. Over many
//! trials the result approaches the analytic loss from [`crate::loss`].

use crate::errors::BayesCipherError;
use crate::loss::check_rule;
use crate::model::CipherSystem;
use crate::model::helper::check_matrix;

use rand::Rng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;

/// A decision rule to simulate.
#[derive(Debug, Clone, Copy)]
pub enum Decoder<'a> {
    /// δ_B, `rule[c] = m`.
    Deterministic(&'a [usize]),
    /// δ_S, `rule[c][m]` = probability of answering `m`.
    Stochastic(&'a [Vec<f64>]),
}

fn weighted(weights: &[f64], what: &str) -> Result<WeightedIndex<f64>, BayesCipherError> {
    WeightedIndex::new(weights).map_err(|e| {
        BayesCipherError::InvalidParameters(format!("cannot sample from {}: {}", what, e))
    })
}

/// Observed error frequency of `decoder` over `trials` simulated messages.
///
/// # Errors
///
/// Returns `BayesCipherError::InvalidParameters` if `trials` is 0 or a
/// distribution cannot be sampled (all weights zero), and the usual shape
/// errors if the rule does not match the system.
pub fn empirical_loss<R: Rng + ?Sized>(
    system: &CipherSystem,
    decoder: Decoder<'_>,
    trials: usize,
    rng: &mut R,
) -> Result<f64, BayesCipherError> {
    if trials == 0 {
        return Err(BayesCipherError::InvalidParameters(
            "Number of trials must be > 0".to_string(),
        ));
    }

    let n = system.n();
    let plaintexts = weighted(system.plaintext_priors(), "plaintext priors")?;
    let keys = weighted(system.key_priors(), "key priors")?;

    // built on first use, rows of unreachable ciphertexts may be all zero
    let mut rows: Vec<Option<WeightedIndex<f64>>> = Vec::new();
    match decoder {
        Decoder::Deterministic(rule) => check_rule(rule, n)?,
        Decoder::Stochastic(rule) => {
            check_matrix("stochastic rule", rule, n)?;
            rows.resize_with(n, || None);
        }
    }

    let mut errors = 0usize;
    for _ in 0..trials {
        let plaintext = plaintexts.sample(rng);
        let ciphertext = system.encrypt(keys.sample(rng), plaintext);

        let guess = match decoder {
            Decoder::Deterministic(rule) => rule[ciphertext],
            Decoder::Stochastic(rule) => {
                let row = match &mut rows[ciphertext] {
                    Some(row) => row,
                    slot => slot.insert(weighted(&rule[ciphertext], "stochastic rule row")?),
                };
                row.sample(rng)
            }
        };

        if guess != plaintext {
            errors += 1;
        }
    }

    log::debug!("simulated {} messages, {} decoded wrongly", trials, errors);
    Ok(errors as f64 / trials as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Analysis, AnalysisConfig};
    use crate::preset::DEMO;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_zero_trials_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let rule = vec![0; DEMO.n()];
        assert!(matches!(
            empirical_loss(&DEMO, Decoder::Deterministic(&rule), 0, &mut rng),
            Err(BayesCipherError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_perfect_decoder_never_errs() {
        // single key, identity table: ciphertext reveals the plaintext
        let system = CipherSystem::try_with(
            vec![0.3, 0.7],
            vec![1.0, 0.0],
            vec![vec![0, 1], vec![1, 0]],
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let loss = empirical_loss(&system, Decoder::Deterministic(&[0, 1]), 1_000, &mut rng).unwrap();
        assert_eq!(loss, 0.0);
    }

    #[test]
    fn test_simulation_tracks_analytic_loss() {
        let analysis = Analysis::run(&DEMO, &AnalysisConfig::default()).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);

        let deterministic = empirical_loss(
            &DEMO,
            Decoder::Deterministic(&analysis.deterministic_rule),
            20_000,
            &mut rng,
        )
        .unwrap();
        assert!((deterministic - analysis.deterministic_loss).abs() < 0.03);

        let stochastic = empirical_loss(
            &DEMO,
            Decoder::Stochastic(&analysis.stochastic_rule),
            20_000,
            &mut rng,
        )
        .unwrap();
        assert!((stochastic - analysis.stochastic_loss).abs() < 0.03);
    }
}
