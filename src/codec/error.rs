use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("No global stats cached for store '{0}'")]
    MissingStats(String),

    #[error("Store '{store}' cannot be normalized: min {min}, max {max}")]
    DegenerateNormalization { store: String, min: f64, max: f64 },

    #[error("Row {index} is for store '{found}', expected '{expected}'")]
    RowMismatch {
        index: usize,
        expected: String,
        found: String,
    },

    #[error("Expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}
