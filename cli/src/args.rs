//! Command line arguments.

use bayes_cipher::data::{DEFAULT_DELIMITER, load_system};
use bayes_cipher::distribution::UnreachablePolicy;
use bayes_cipher::errors::BayesCipherError;
use bayes_cipher::preset::DEMO;
use bayes_cipher::{AnalysisConfig, CipherSystem};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bayes-cli")]
#[command(about = "Bayesian decision rules and their 0-1 loss for a table substitution cipher")]
#[command(version)]
pub(crate) struct Args {
    /// Priors file: row 1 plaintext priors, row 2 key priors
    #[arg(long, value_name = "PATH", required_unless_present = "demo", requires = "table")]
    pub(crate) priors: Option<PathBuf>,

    /// Cipher table file: row k holds the ciphertext of every plaintext under key k
    #[arg(long, value_name = "PATH", required_unless_present = "demo", requires = "priors")]
    pub(crate) table: Option<PathBuf>,

    /// Cell delimiter used by both files
    #[arg(long, default_value_t = DEFAULT_DELIMITER)]
    pub(crate) delimiter: char,

    /// Use the built-in 20-symbol shift cipher instead of files
    #[arg(long, conflicts_with_all = ["priors", "table"])]
    pub(crate) demo: bool,

    /// Unreachable ciphertexts: fail | zero
    #[arg(long, default_value_t = UnreachablePolicy::Fail)]
    pub(crate) unreachable: UnreachablePolicy,

    /// Print a single report (1-7) instead of asking interactively
    #[arg(long, value_name = "N")]
    pub(crate) report: Option<String>,

    /// Write the full analysis as JSON into this directory
    #[arg(long, value_name = "DIR")]
    pub(crate) export: Option<PathBuf>,

    /// Cross-check both losses by simulating this many messages
    #[arg(long, value_name = "TRIALS")]
    pub(crate) simulate: Option<usize>,

    /// Seed for --simulate
    #[arg(long, default_value_t = 42)]
    pub(crate) seed: u64,
}

impl Args {
    pub(crate) fn config(&self) -> AnalysisConfig {
        AnalysisConfig {
            unreachable: self.unreachable,
            ..Default::default()
        }
    }

    pub(crate) fn load_system(&self) -> Result<CipherSystem, BayesCipherError> {
        match (&self.priors, &self.table) {
            (Some(priors), Some(table)) if !self.demo => load_system(priors, table, self.delimiter),
            _ => Ok(DEMO.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_flag() {
        let args = Args::try_parse_from(["bayes-cli", "--demo", "--unreachable", "zero"]).unwrap();
        assert!(args.demo);
        assert_eq!(args.config().unreachable, UnreachablePolicy::Zero);
        assert_eq!(args.load_system().unwrap().n(), 20);
    }

    #[test]
    fn test_files_required_without_demo() {
        assert!(Args::try_parse_from(["bayes-cli"]).is_err());
        assert!(Args::try_parse_from(["bayes-cli", "--priors", "p.csv"]).is_err());
        assert!(Args::try_parse_from(["bayes-cli", "--demo", "--table", "t.csv"]).is_err());
    }

    #[test]
    fn test_file_arguments() {
        let args = Args::try_parse_from([
            "bayes-cli",
            "--priors",
            "data/prob.csv",
            "--table",
            "data/table.csv",
            "--delimiter",
            ";",
            "--report",
            "6",
        ])
        .unwrap();
        assert_eq!(args.delimiter, ';');
        assert_eq!(args.report.as_deref(), Some("6"));
        assert_eq!(args.unreachable, UnreachablePolicy::Fail);
    }

    #[test]
    fn test_bad_policy_rejected() {
        assert!(Args::try_parse_from(["bayes-cli", "--demo", "--unreachable", "skip"]).is_err());
    }
}
