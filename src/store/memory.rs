use super::{Feature, FeatureStore, ScoreStats, StoreError};
use crate::window::Strand;
use async_trait::async_trait;

/// Immutable store holding its features sorted by start coordinate
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    name: String,
    /// Sorted by `start`
    features: Vec<Feature>,
    /// `None` when the store has no features to summarize
    stats: Option<ScoreStats>,
}

/// Mutable builder for an in-memory store
pub struct InMemoryStoreBuilder {
    name: String,
    features: Vec<Feature>,
}

impl InMemoryStoreBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            features: Vec::new(),
        }
    }

    /// Add a feature, rejecting empty intervals and non-finite scores
    pub fn add_feature(
        &mut self,
        start: i64,
        end: i64,
        score: f64,
        strand: Strand,
    ) -> Result<(), StoreError> {
        if end <= start {
            return Err(StoreError::InvalidFeature {
                start,
                end,
                reason: "end must be greater than start".to_string(),
            });
        }
        if !score.is_finite() {
            return Err(StoreError::InvalidFeature {
                start,
                end,
                reason: format!("score {} is not finite", score),
            });
        }

        self.features.push(Feature {
            start,
            end,
            score,
            strand,
            store: self.name.clone(),
        });

        Ok(())
    }

    /// Chaining form of [`add_feature`](Self::add_feature)
    pub fn with_feature(
        mut self,
        start: i64,
        end: i64,
        score: f64,
        strand: Strand,
    ) -> Result<Self, StoreError> {
        self.add_feature(start, end, score, strand)?;
        Ok(self)
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Build the immutable store, precomputing its score summary
    pub fn build(mut self) -> InMemoryStore {
        self.features.sort_by_key(|f| (f.start, f.end));

        let stats = self.features.iter().fold(None, |acc: Option<ScoreStats>, f| {
            Some(match acc {
                None => ScoreStats::new(f.score, f.score),
                Some(s) => ScoreStats::new(s.score_min.min(f.score), s.score_max.max(f.score)),
            })
        });

        InMemoryStore {
            name: self.name,
            features: self.features,
            stats,
        }
    }
}

impl InMemoryStore {
    pub fn builder(name: impl Into<String>) -> InMemoryStoreBuilder {
        InMemoryStoreBuilder::new(name)
    }

    pub fn feature_count(&self) -> usize {
        self.features.len()
    }

    /// Iterate over all features in coordinate order
    pub fn features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter()
    }

    fn overlapping(&self, start: i64, end: i64) -> Vec<Feature> {
        // Everything past this point starts at or after `end`.
        let upper = self.features.partition_point(|f| f.start < end);
        self.features[..upper]
            .iter()
            .filter(|f| f.end > start)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl FeatureStore for InMemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn range_query(&self, start: i64, end: i64) -> Result<Vec<Feature>, StoreError> {
        Ok(self.overlapping(start, end))
    }

    async fn global_stats(&self) -> Result<ScoreStats, StoreError> {
        self.stats
            .ok_or_else(|| StoreError::StatsUnavailable(self.name.clone()))
    }
}
