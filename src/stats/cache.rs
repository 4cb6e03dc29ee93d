use crate::store::{FeatureStore, ScoreStats, StoreError};
use futures::future::join_all;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// Global score bounds for the stores of one clustering run
///
/// Entries are written once and never refetched. Create one per run and
/// drop it when the run ends.
#[derive(Debug, Clone, Default)]
pub struct StatsCache {
    entries: HashMap<String, ScoreStats>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch stats for every store not cached yet.
    ///
    /// Fetches run concurrently and all of them are awaited. If any fails,
    /// nothing from this call is cached and the first failure is returned.
    pub async fn fetch_all(&mut self, stores: &[Arc<dyn FeatureStore>]) -> Result<(), StoreError> {
        let mut seen = HashSet::new();
        let missing: Vec<&Arc<dyn FeatureStore>> = stores
            .iter()
            .filter(|s| !self.entries.contains_key(s.name()) && seen.insert(s.name()))
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        let results = join_all(missing.iter().map(|s| s.global_stats())).await;

        let mut fetched = Vec::with_capacity(missing.len());
        let mut first_error = None;
        for (store, result) in missing.iter().zip(results) {
            match result {
                Ok(stats) => {
                    debug!(
                        store = store.name(),
                        min = stats.score_min,
                        max = stats.score_max,
                        "fetched global stats"
                    );
                    fetched.push((store.name().to_string(), stats));
                }
                Err(e) => {
                    warn!(store = store.name(), error = %e, "could not get global stats");
                    first_error.get_or_insert(e);
                }
            }
        }

        if let Some(e) = first_error {
            return Err(e);
        }

        for (name, stats) in fetched {
            self.entries.entry(name).or_insert(stats);
        }

        Ok(())
    }

    /// Seed an entry directly. Existing entries are kept; returns whether
    /// `stats` was stored.
    pub fn insert(&mut self, store: impl Into<String>, stats: ScoreStats) -> bool {
        let mut inserted = false;
        self.entries.entry(store.into()).or_insert_with(|| {
            inserted = true;
            stats
        });
        inserted
    }

    pub fn get(&self, store: &str) -> Option<ScoreStats> {
        self.entries.get(store).copied()
    }

    pub fn contains(&self, store: &str) -> bool {
        self.entries.contains_key(store)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
