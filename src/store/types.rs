use crate::window::Strand;
use serde::{Deserialize, Serialize};

/// A scored interval returned by a range query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub start: i64,
    pub end: i64,
    pub score: f64,
    pub strand: Strand,
    /// Name of the store that produced this feature
    pub store: String,
}

/// Global score bounds of one store
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    pub score_min: f64,
    pub score_max: f64,
}

impl ScoreStats {
    pub fn new(score_min: f64, score_max: f64) -> Self {
        Self {
            score_min,
            score_max,
        }
    }

    pub fn range(&self) -> f64 {
        self.score_max - self.score_min
    }

    /// Bounds that can be used to normalize: finite and not collapsed
    pub fn is_usable(&self) -> bool {
        self.score_min.is_finite() && self.score_max.is_finite() && self.range() != 0.0
    }
}
