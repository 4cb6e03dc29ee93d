use super::config::{RowLabel, RunConfig};
use crate::clusterer::ClusterHeatmap;
use crate::window::{QueryInterval, RefSequence};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A non-fatal problem hit during a run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RunIssue {
    /// Anchor skipped because it has no usable strand
    OrientationUnknown { store: String, start: i64, end: i64 },
    /// A range query failed; `region` is `None` for the anchor scan
    StoreQueryFailed {
        store: String,
        region: Option<QueryInterval>,
        message: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub anchors_found: usize,
    pub anchors_skipped: usize,
    pub regions_queried: usize,
    pub heatmaps_built: usize,
    pub heatmaps_failed: usize,
    pub issues: Vec<RunIssue>,
}

impl RunSummary {
    pub fn failed_anchor_scans(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| matches!(i, RunIssue::StoreQueryFailed { region: None, .. }))
            .count()
    }
}

/// Everything a renderer needs from one run
#[derive(Debug, Clone, Serialize)]
pub struct ClusteringOutcome {
    pub run_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub generator: String,
    pub sequence: RefSequence,
    pub config: RunConfig,
    pub row_labels: Vec<RowLabel>,
    pub iterations: usize,
    pub converged: bool,
    pub clusters: Vec<ClusterHeatmap>,
    pub summary: RunSummary,
}
