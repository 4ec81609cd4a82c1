//! # Bayes Cipher
//!
//! Optimal Bayesian decision rules against a table substitution cipher.
//!
//! Given priors over plaintexts and keys together with a cipher table
//! `table[key][plaintext] = ciphertext`, the crate derives P(C), P(M,C), P(M|C),
//! the deterministic and stochastic Bayes decision rules and the expected 0-1
//! loss of each rule.

pub mod analysis;
pub mod data;
pub mod decision;
pub mod distribution;
pub mod errors;
pub mod loss;
pub mod model;
pub mod preset;
pub mod simulate;

pub use analysis::{Analysis, AnalysisConfig};
pub use errors::BayesCipherError;
pub use model::{CipherSystem, CipherTable, DEFAULT_ALPHABET_SIZE, Matrix, Rule, Vector};
