use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Range query on store '{store}' failed: {message}")]
    QueryFailed { store: String, message: String },

    #[error("Store '{0}' cannot report global statistics")]
    StatsUnavailable(String),

    #[error("Unknown store: {0}")]
    UnknownStore(String),

    #[error("Invalid feature {start}..{end}: {reason}")]
    InvalidFeature {
        start: i64,
        end: i64,
        reason: String,
    },

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Failed to read store data: {0}")]
    Io(#[from] std::io::Error),
}
