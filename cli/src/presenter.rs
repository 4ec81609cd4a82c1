//! Text rendering of the reports.

use crate::menu::ReportKind;

use bayes_cipher::errors::BayesCipherError;
use bayes_cipher::{Analysis, AnalysisConfig, CipherSystem};
use itertools::Itertools;

/// Decimal places for probabilities.
pub const PROBABILITY_PRECISION: usize = 3;
/// Decimal places for stochastic rule entries.
pub const RULE_PRECISION: usize = 1;
/// Decimal places for loss values.
pub const LOSS_PRECISION: usize = 4;

pub fn format_vector(values: &[f64], precision: usize) -> String {
    format!(
        "[{}]",
        values.iter().map(|v| format!("{:.*}", precision, v)).join(", ")
    )
}

pub fn format_matrix(rows: &[Vec<f64>], precision: usize) -> String {
    rows.iter()
        .map(|row| format_vector(row, precision))
        .join("\n")
}

pub fn format_rule(rule: &[usize]) -> String {
    format!("[{}]", rule.iter().join(", "))
}

/// Renders one report from a finished analysis.
pub fn render(kind: ReportKind, analysis: &Analysis) -> String {
    let body = match kind {
        ReportKind::CiphertextDistribution => format_vector(&analysis.ciphertext, PROBABILITY_PRECISION),
        ReportKind::JointDistribution => format_matrix(&analysis.joint, PROBABILITY_PRECISION),
        ReportKind::PosteriorDistribution => {
            let mut text = format_matrix(&analysis.posterior, PROBABILITY_PRECISION);
            if !analysis.unreachable.is_empty() {
                text.push_str(&format!(
                    "\nundefined (zero-filled) columns: {}",
                    format_rule(&analysis.unreachable)
                ));
            }
            text
        }
        ReportKind::DeterministicRule => format_rule(&analysis.deterministic_rule),
        ReportKind::StochasticRule => format_matrix(&analysis.stochastic_rule, RULE_PRECISION),
        ReportKind::DeterministicLoss => format!("{:.*}", LOSS_PRECISION, analysis.deterministic_loss),
        ReportKind::StochasticLoss => format!("{:.*}", LOSS_PRECISION, analysis.stochastic_loss),
    };
    format!("{}:\n{}", kind.title(), body)
}

/// Computes only what `kind` needs and renders it.
///
/// P(C) and P(M,C) never touch the posterior, so they are available even when
/// some ciphertext is unreachable under the failing policy.
pub fn render_report(
    kind: ReportKind,
    system: &CipherSystem,
    config: &AnalysisConfig,
) -> Result<String, BayesCipherError> {
    let body = match kind {
        ReportKind::CiphertextDistribution => {
            format_vector(&system.ciphertext_distribution()?, PROBABILITY_PRECISION)
        }
        ReportKind::JointDistribution => {
            format_matrix(&system.joint_distribution()?, PROBABILITY_PRECISION)
        }
        _ => return Ok(render(kind, &Analysis::run(system, config)?)),
    };
    Ok(format!("{}:\n{}", kind.title(), body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bayes_cipher::distribution::UnreachablePolicy;

    fn swap_analysis() -> Analysis {
        let system =
            CipherSystem::try_with(vec![0.5, 0.5], vec![0.5, 0.5], vec![vec![0, 1], vec![1, 0]])
                .unwrap();
        Analysis::run(&system, &AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_precisions() {
        let analysis = swap_analysis();
        assert_eq!(
            render(ReportKind::CiphertextDistribution, &analysis),
            "Ciphertext distribution P(C):\n[0.500, 0.500]"
        );
        assert_eq!(
            render(ReportKind::JointDistribution, &analysis),
            "Joint distribution P(M,C):\n[0.250, 0.250]\n[0.250, 0.250]"
        );
        assert_eq!(
            render(ReportKind::StochasticRule, &analysis),
            "Stochastic Bayes rule:\n[0.5, 0.5]\n[0.5, 0.5]"
        );
        assert_eq!(
            render(ReportKind::DeterministicRule, &analysis),
            "Deterministic Bayes rule:\n[0, 0]"
        );
        assert_eq!(
            render(ReportKind::DeterministicLoss, &analysis),
            "Average loss of the deterministic rule:\n0.5000"
        );
    }

    #[test]
    fn test_distributions_survive_unreachable_ciphertext() {
        let system =
            CipherSystem::try_with(vec![1.0, 0.0], vec![1.0, 0.0], vec![vec![0, 1], vec![1, 0]])
                .unwrap();
        let config = AnalysisConfig::default();

        let text = render_report(ReportKind::CiphertextDistribution, &system, &config).unwrap();
        assert!(text.ends_with("[1.000, 0.000]"));

        assert!(matches!(
            render_report(ReportKind::PosteriorDistribution, &system, &config),
            Err(BayesCipherError::UnreachableCiphertext { ciphertext: 1 })
        ));

        let zero = AnalysisConfig {
            unreachable: UnreachablePolicy::Zero,
            ..config
        };
        let text = render_report(ReportKind::PosteriorDistribution, &system, &zero).unwrap();
        assert!(text.ends_with("undefined (zero-filled) columns: [1]"));
    }
}
