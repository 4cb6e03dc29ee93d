use crate::codec::CodecError;
use crate::store::StoreError;
use thiserror::Error;

/// Terminal failure of a clustering run
///
/// Per-anchor and per-region problems never end up here; they are
/// collected in the run summary instead.
#[derive(Error, Debug)]
pub enum ClusteringError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Global stats unavailable: {0}")]
    StatsUnavailable(#[source] StoreError),

    #[error("Store '{store}' cannot be normalized: score range [{min}, {max}] is degenerate")]
    DegenerateNormalization { store: String, min: f64, max: f64 },

    #[error("No heatmaps could be built ({failed} regions failed)")]
    NoData { failed: usize },

    #[error("Failed to encode heatmaps: {0}")]
    Codec(#[source] CodecError),
}

impl From<CodecError> for ClusteringError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::DegenerateNormalization { store, min, max } => {
                ClusteringError::DegenerateNormalization { store, min, max }
            }
            other => ClusteringError::Codec(other),
        }
    }
}
