use crate::errors::BayesCipherError;

use std::fs;
use std::path::Path;

/// One non-blank line of a delimited table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source text.
    pub line: usize,
    /// Trimmed cells, trailing empty cells dropped.
    pub cells: Vec<String>,
}

/// Splits `text` into records. Blank lines are skipped but still counted.
pub fn read_table(text: &str, delimiter: char) -> Vec<Record> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let mut cells: Vec<String> = line
                .split(delimiter)
                .map(|cell| cell.trim().to_string())
                .collect();
            while cells.last().is_some_and(|cell| cell.is_empty()) {
                cells.pop();
            }
            Record { line: i + 1, cells }
        })
        .collect()
}

/// Reads a UTF-8 file and splits it with [`read_table`].
pub fn read_table_file(path: &Path, delimiter: char) -> Result<Vec<Record>, BayesCipherError> {
    let text = fs::read_to_string(path)?;
    Ok(read_table(&text, delimiter))
}
