//! Shared fixtures for unit tests

use crate::store::{Feature, FeatureStore, InMemoryStore, ScoreStats, StoreError};
use crate::window::Strand;
use async_trait::async_trait;

/// Store whose range queries and/or stats always fail
pub struct FailingStore {
    pub name: String,
    pub fail_queries: bool,
    pub stats: Option<ScoreStats>,
}

impl FailingStore {
    pub fn queries(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fail_queries: true,
            stats: Some(ScoreStats::new(0.0, 1.0)),
        }
    }

    pub fn stats(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fail_queries: false,
            stats: None,
        }
    }
}

#[async_trait]
impl FeatureStore for FailingStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn range_query(&self, _start: i64, _end: i64) -> Result<Vec<Feature>, StoreError> {
        if self.fail_queries {
            Err(StoreError::QueryFailed {
                store: self.name.clone(),
                message: "backend offline".to_string(),
            })
        } else {
            Ok(Vec::new())
        }
    }

    async fn global_stats(&self) -> Result<ScoreStats, StoreError> {
        self.stats
            .ok_or_else(|| StoreError::StatsUnavailable(self.name.clone()))
    }
}

/// Display store with one feature per `(start, end, score)` triple
pub fn signal(name: &str, features: &[(i64, i64, f64)]) -> InMemoryStore {
    let mut builder = InMemoryStore::builder(name);
    for &(start, end, score) in features {
        builder
            .add_feature(start, end, score, Strand::Unknown)
            .unwrap();
    }
    builder.build()
}

/// Region store with one anchor per `(start, end, strand)` triple
pub fn anchors(name: &str, features: &[(i64, i64, Strand)]) -> InMemoryStore {
    let mut builder = InMemoryStore::builder(name);
    for &(start, end, strand) in features {
        builder.add_feature(start, end, 0.0, strand).unwrap();
    }
    builder.build()
}

/// Wraps a store and fails every range query covering `hole`
pub struct PatchyStore {
    inner: InMemoryStore,
    hole: i64,
}

impl PatchyStore {
    pub fn new(inner: InMemoryStore, hole: i64) -> Self {
        Self { inner, hole }
    }
}

#[async_trait]
impl FeatureStore for PatchyStore {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn range_query(&self, start: i64, end: i64) -> Result<Vec<Feature>, StoreError> {
        if start <= self.hole && self.hole < end {
            return Err(StoreError::QueryFailed {
                store: self.inner.name().to_string(),
                message: format!("no data served around {}", self.hole),
            });
        }
        self.inner.range_query(start, end).await
    }

    async fn global_stats(&self) -> Result<ScoreStats, StoreError> {
        self.inner.global_stats().await
    }
}

/// Range queries never complete; stats always fail
pub struct StalledStore {
    pub name: String,
}

#[async_trait]
impl FeatureStore for StalledStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn range_query(&self, _start: i64, _end: i64) -> Result<Vec<Feature>, StoreError> {
        std::future::pending().await
    }

    async fn global_stats(&self) -> Result<ScoreStats, StoreError> {
        Err(StoreError::StatsUnavailable(self.name.clone()))
    }
}
