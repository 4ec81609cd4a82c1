//! The seven reports offered by the interactive menu.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    CiphertextDistribution,
    JointDistribution,
    PosteriorDistribution,
    DeterministicRule,
    StochasticRule,
    DeterministicLoss,
    StochasticLoss,
}

impl ReportKind {
    pub const ALL: [ReportKind; 7] = [
        ReportKind::CiphertextDistribution,
        ReportKind::JointDistribution,
        ReportKind::PosteriorDistribution,
        ReportKind::DeterministicRule,
        ReportKind::StochasticRule,
        ReportKind::DeterministicLoss,
        ReportKind::StochasticLoss,
    ];

    /// Menu number, starting at 1.
    pub fn number(self) -> usize {
        ReportKind::ALL
            .iter()
            .position(|&kind| kind == self)
            .map_or(0, |i| i + 1)
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::CiphertextDistribution => "Ciphertext distribution P(C)",
            ReportKind::JointDistribution => "Joint distribution P(M,C)",
            ReportKind::PosteriorDistribution => "Posterior distribution P(M|C)",
            ReportKind::DeterministicRule => "Deterministic Bayes rule",
            ReportKind::StochasticRule => "Stochastic Bayes rule",
            ReportKind::DeterministicLoss => "Average loss of the deterministic rule",
            ReportKind::StochasticLoss => "Average loss of the stochastic rule",
        }
    }

    /// Parses a menu answer. Anything but `1..=7` is `None`.
    pub fn from_selection(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        number
            .checked_sub(1)
            .and_then(|i| ReportKind::ALL.get(i).copied())
    }
}

pub fn menu_text() -> String {
    let mut text = String::from("Select a report:\n");
    for kind in ReportKind::ALL {
        text.push_str(&format!("  {}. {}\n", kind.number(), kind.title()));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_round_trip() {
        for kind in ReportKind::ALL {
            assert_eq!(ReportKind::from_selection(&kind.number().to_string()), Some(kind));
        }
    }

    #[test]
    fn test_invalid_selection() {
        for input in ["0", "8", "-1", "", "two", "1.5"] {
            assert_eq!(ReportKind::from_selection(input), None, "input {:?}", input);
        }
        assert_eq!(ReportKind::from_selection(" 3\n"), Some(ReportKind::PosteriorDistribution));
    }

    #[test]
    fn test_menu_lists_all_reports() {
        let text = menu_text();
        assert!(text.contains("  1. Ciphertext distribution P(C)"));
        assert!(text.contains("  7. Average loss of the stochastic rule"));
        assert_eq!(text.lines().count(), 8);
    }
}
