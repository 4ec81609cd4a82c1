use crate::errors::BayesCipherError;

/// Checks that `vector` has exactly `n` entries.
pub fn check_vector(name: &str, vector: &[f64], n: usize) -> Result<(), BayesCipherError> {
    if vector.len() != n {
        return Err(BayesCipherError::DimensionMismatch(format!(
            "{} has length {} but expected {}",
            name,
            vector.len(),
            n
        )));
    }
    Ok(())
}

/// Checks that `matrix` is `n`×`n`.
pub fn check_matrix<T>(name: &str, matrix: &[Vec<T>], n: usize) -> Result<(), BayesCipherError> {
    if matrix.len() != n {
        return Err(BayesCipherError::DimensionMismatch(format!(
            "{} has {} rows but expected {}",
            name,
            matrix.len(),
            n
        )));
    }
    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(BayesCipherError::DimensionMismatch(format!(
                "{} row {} has length {} but expected {}",
                name,
                i,
                row.len(),
                n
            )));
        }
    }
    Ok(())
}

/// Checks that `table` is `n`×`n` and every cell lies in `[0, n)`.
pub fn check_table(table: &[Vec<usize>], n: usize) -> Result<(), BayesCipherError> {
    check_matrix("cipher table", table, n)?;
    for (key, row) in table.iter().enumerate() {
        if let Some((plaintext, &value)) = row.iter().enumerate().find(|&(_, &v)| v >= n) {
            return Err(BayesCipherError::TableEntryOutOfRange {
                key,
                plaintext,
                value,
                n,
            });
        }
    }
    Ok(())
}

/// Sum of all entries.
pub fn total(vector: &[f64]) -> f64 {
    vector.iter().sum()
}

/// Sum of column `col` of a matrix.
pub fn column_sum(matrix: &[Vec<f64>], col: usize) -> f64 {
    matrix.iter().map(|row| row[col]).sum()
}

/// Whether `row` maps `0..n` onto `0..n` one to one.
pub fn is_permutation(row: &[usize], n: usize) -> bool {
    if row.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &value in row {
        if value >= n || seen[value] {
            return false;
        }
        seen[value] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_vector() {
        assert!(check_vector("priors", &[0.5, 0.5], 2).is_ok());
        assert!(matches!(
            check_vector("priors", &[1.0], 2),
            Err(BayesCipherError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_check_matrix_ragged() {
        let ragged = vec![vec![0.5, 0.5], vec![1.0]];
        let err = check_matrix("joint", &ragged, 2).unwrap_err();
        assert!(err.to_string().contains("joint row 1"));
    }

    #[test]
    fn test_check_table_out_of_range() {
        let table = vec![vec![0, 1], vec![1, 2]];
        match check_table(&table, 2) {
            Err(BayesCipherError::TableEntryOutOfRange {
                key,
                plaintext,
                value,
                n,
            }) => {
                assert_eq!((key, plaintext, value, n), (1, 1, 2, 2));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_column_sum() {
        let matrix = vec![vec![0.25, 0.5], vec![0.25, 0.0]];
        assert_eq!(column_sum(&matrix, 0), 0.5);
        assert_eq!(column_sum(&matrix, 1), 0.5);
        assert_eq!(total(&[0.25, 0.75]), 1.0);
    }

    #[test]
    fn test_is_permutation() {
        assert!(is_permutation(&[2, 0, 1], 3));
        assert!(!is_permutation(&[0, 0, 1], 3));
        assert!(!is_permutation(&[0, 1], 3));
        assert!(!is_permutation(&[0, 1, 3], 3));
    }
}
