use crate::error::ClusteringError;
use crate::store::StoreRegistry;
use crate::window::{AnchorChoice, RefSequence};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_NUM_OF_BINS: usize = 6;
pub const DEFAULT_QUERY_LENGTH: u32 = 1000;
pub const DEFAULT_MAX_ITERATIONS: usize = 100;
pub const DEFAULT_SEED: u64 = 42;

/// A display track and the store it reads from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackName {
    pub store: String,
    pub track: String,
}

/// Label for one heatmap row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowLabel {
    pub store: String,
    pub label: String,
}

/// Parameters of one clustering run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub num_of_bins: usize,
    /// Window length in base pairs
    pub query_length: u32,
    /// `None` means `ceil(sqrt(n / 2))`
    pub num_clusters: Option<usize>,
    pub anchor_choice: AnchorChoice,
    /// Stores binned into heatmap rows, in row order
    pub display_stores: Vec<String>,
    /// Stores whose features are used as anchors
    pub region_stores: Vec<String>,
    pub track_names: Vec<TrackName>,
    pub max_iterations: usize,
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_of_bins: DEFAULT_NUM_OF_BINS,
            query_length: DEFAULT_QUERY_LENGTH,
            num_clusters: None,
            anchor_choice: AnchorChoice::UseStart,
            display_stores: Vec::new(),
            region_stores: Vec::new(),
            track_names: Vec::new(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: DEFAULT_SEED,
        }
    }
}

impl RunConfig {
    /// Check everything that can be checked without querying a store
    pub fn validate(
        &self,
        registry: &StoreRegistry,
        sequence: &RefSequence,
    ) -> Result<(), ClusteringError> {
        let invalid = |msg: String| Err(ClusteringError::InvalidConfiguration(msg));

        if self.num_of_bins == 0 {
            return invalid("number of bins must be positive".to_string());
        }
        if self.query_length == 0 {
            return invalid("query length must be positive".to_string());
        }
        if self.num_of_bins > self.query_length as usize {
            return invalid(format!(
                "number of bins ({}) must not exceed query length ({})",
                self.num_of_bins, self.query_length
            ));
        }
        if self.num_clusters == Some(0) {
            return invalid("number of clusters must be at least 1".to_string());
        }
        if sequence.length <= 0 {
            return invalid(format!("sequence '{}' has no length", sequence.name));
        }
        if self.display_stores.is_empty() {
            return invalid("no display stores selected".to_string());
        }
        if self.region_stores.is_empty() {
            return invalid("no region stores selected".to_string());
        }

        let mut seen = HashSet::new();
        for name in &self.display_stores {
            if !seen.insert(name) {
                return invalid(format!("display store '{}' listed twice", name));
            }
        }

        for name in self.display_stores.iter().chain(&self.region_stores) {
            if !registry.contains(name) {
                return invalid(format!("unknown store '{}'", name));
            }
        }

        Ok(())
    }

    /// One label per display store: the names of every track showing it,
    /// or the store name when no track does.
    pub fn row_labels(&self) -> Vec<RowLabel> {
        self.display_stores
            .iter()
            .map(|store| {
                let tracks: Vec<&str> = self
                    .track_names
                    .iter()
                    .filter(|t| &t.store == store)
                    .map(|t| t.track.as_str())
                    .collect();
                let label = if tracks.is_empty() {
                    store.clone()
                } else {
                    tracks.join(", ")
                };
                RowLabel {
                    store: store.clone(),
                    label,
                }
            })
            .collect()
    }
}
