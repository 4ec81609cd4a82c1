#[derive(thiserror::Error, Debug)]
pub enum BayesCipherError {
    /// A table does not have the shape required by the shared alphabet size.
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    /// A cipher table cell names a ciphertext outside `[0, n)`.
    #[error("TableEntryOutOfRange: table[{key}][{plaintext}] = {value} is outside [0, {n})")]
    TableEntryOutOfRange {
        key: usize,
        plaintext: usize,
        value: usize,
        n: usize,
    },
    /// A deterministic rule names a plaintext outside `[0, n)`.
    #[error("RuleEntryOutOfRange: rule[{ciphertext}] = {value} is outside [0, {n})")]
    RuleEntryOutOfRange {
        ciphertext: usize,
        value: usize,
        n: usize,
    },
    /// P(C = c) is zero, so the posterior column for `c` is undefined.
    #[error("UnreachableCiphertext: P(C={ciphertext}) = 0, posterior column is undefined")]
    UnreachableCiphertext { ciphertext: usize },

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
