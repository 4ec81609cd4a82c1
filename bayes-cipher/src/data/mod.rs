//! # Data
//!
//! Loading priors and cipher tables from delimiter-separated text files.
//!
//! Two files describe a system:
//!
//! - a priors file with exactly two rows of floats: plaintext priors, then key priors;
//! - a cipher table file with `n` rows of `n` integers, row `k` being the
//!   substitution used under key `k`.
//!
//! ```
//! # use bayes_cipher::data::{parse_cipher_table, parse_priors, read_table};
//! let priors = read_table("0.5,0.5\n0.5,0.5\n", ',');
//! let (plaintext, key) = parse_priors(&priors).unwrap();
//! assert_eq!(plaintext, vec![0.5, 0.5]);
//! assert_eq!(key, vec![0.5, 0.5]);
//!
//! let table = parse_cipher_table(&read_table("0,1\n1,0\n", ',')).unwrap();
//! assert_eq!(table, vec![vec![0, 1], vec![1, 0]]);
//! ```

mod reader;

pub use reader::{Record, read_table, read_table_file};

use crate::errors::BayesCipherError;
use crate::model::{CipherSystem, CipherTable, Vector};

use std::path::Path;

/// Default cell delimiter.
pub const DEFAULT_DELIMITER: char = ',';

fn parse_cell<T: std::str::FromStr>(record: &Record, col: usize, what: &str) -> Result<T, BayesCipherError> {
    let cell = &record.cells[col];
    cell.parse::<T>().map_err(|_| BayesCipherError::Parse {
        line: record.line,
        message: format!("column {}: '{}' is not a valid {}", col + 1, cell, what),
    })
}

fn parse_row<T: std::str::FromStr>(record: &Record, what: &str) -> Result<Vec<T>, BayesCipherError> {
    (0..record.cells.len())
        .map(|col| parse_cell(record, col, what))
        .collect()
}

/// Parses the two prior rows into `(plaintext_priors, key_priors)`.
///
/// # Errors
///
/// Returns `BayesCipherError::Parse` if there are not exactly two rows or a
/// cell is not a number, and `BayesCipherError::DimensionMismatch` if the rows
/// differ in length.
pub fn parse_priors(records: &[Record]) -> Result<(Vector, Vector), BayesCipherError> {
    if records.len() != 2 {
        return Err(BayesCipherError::Parse {
            line: records.get(2).map_or(records.len().max(1), |r| r.line),
            message: format!("priors table must have exactly 2 rows, found {}", records.len()),
        });
    }

    let plaintext: Vector = parse_row(&records[0], "probability")?;
    let key: Vector = parse_row(&records[1], "probability")?;
    if plaintext.len() != key.len() {
        return Err(BayesCipherError::DimensionMismatch(format!(
            "plaintext priors have {} entries but key priors have {}",
            plaintext.len(),
            key.len()
        )));
    }
    Ok((plaintext, key))
}

/// Parses the cipher table rows. Range and shape are checked later by
/// [`CipherSystem::try_with`].
pub fn parse_cipher_table(records: &[Record]) -> Result<CipherTable, BayesCipherError> {
    records
        .iter()
        .map(|record| parse_row(record, "ciphertext index"))
        .collect()
}

pub fn load_priors(path: &Path, delimiter: char) -> Result<(Vector, Vector), BayesCipherError> {
    parse_priors(&read_table_file(path, delimiter)?)
}

pub fn load_cipher_table(path: &Path, delimiter: char) -> Result<CipherTable, BayesCipherError> {
    parse_cipher_table(&read_table_file(path, delimiter)?)
}

/// Loads both files and builds a validated [`CipherSystem`].
pub fn load_system(
    priors_path: &Path,
    table_path: &Path,
    delimiter: char,
) -> Result<CipherSystem, BayesCipherError> {
    let (plaintext, key) = load_priors(priors_path, delimiter)?;
    let table = load_cipher_table(table_path, delimiter)?;
    log::debug!(
        "loaded priors from {} and a {}-row cipher table from {}",
        priors_path.display(),
        table.len(),
        table_path.display()
    );
    CipherSystem::try_with(plaintext, key, table)
}
