//! # Model
//!
//! Shared numeric types and the validated input bundle [`CipherSystem`].

pub mod helper;
pub mod system;

/// A probability vector indexed by symbol.
pub type Vector = Vec<f64>;
/// A probability matrix, `matrix[row][col]`.
pub type Matrix = Vec<Vec<f64>>;
/// `table[key][plaintext] = ciphertext`.
pub type CipherTable = Vec<Vec<usize>>;
/// A deterministic decision rule, `rule[ciphertext] = plaintext`.
pub type Rule = Vec<usize>;

/// Alphabet size of the reference data sets.
pub const DEFAULT_ALPHABET_SIZE: usize = 20;

pub use helper::{check_matrix, check_table, check_vector, column_sum, is_permutation, total};
pub use system::CipherSystem;
