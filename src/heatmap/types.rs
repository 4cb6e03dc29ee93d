use crate::window::QueryInterval;
use serde::{Deserialize, Serialize};

/// One row of a heatmap: the binned signal of a single store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRow {
    pub store: String,
    pub values: Vec<f64>,
}

/// Per-region matrix of binned scores, one row per display store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heatmap {
    /// `None` for centroids, which have no genomic coordinate
    pub region: Option<QueryInterval>,
    /// Rows in the run's store order
    pub rows: Vec<StoreRow>,
}

impl Heatmap {
    pub fn row(&self, store: &str) -> Option<&[f64]> {
        self.rows
            .iter()
            .find(|r| r.store == store)
            .map(|r| r.values.as_slice())
    }

    /// Bins per row (0 for a heatmap with no rows)
    pub fn num_bins(&self) -> usize {
        self.rows.first().map_or(0, |r| r.values.len())
    }

    /// Left and right coordinates for display, if this heatmap has a region
    pub fn display_span(&self) -> Option<(i64, i64)> {
        self.region.as_ref().map(QueryInterval::display_span)
    }
}
