mod error;
mod loader;
mod memory;
mod registry;
mod types;


pub use error::StoreError;
pub use loader::{load_bed, load_bedgraph};
pub use memory::{InMemoryStore, InMemoryStoreBuilder};
pub use registry::StoreRegistry;
pub use types::{Feature, ScoreStats};

use async_trait::async_trait;

/// Read-only source of scored features on one reference sequence
///
/// Implementations are queried concurrently from many tasks at once, so
/// every method takes `&self` and must be free of side effects.
///
/// # Example
///
/// ```rust,ignore
/// let features = store.range_query(1_000, 2_000).await?;
/// let stats = store.global_stats().await?;
/// ```
#[async_trait]
pub trait FeatureStore: Send + Sync {
    /// Identity used to key rows, stats and error reports
    fn name(&self) -> &str;

    /// All features overlapping the half-open range `[start, end)`
    async fn range_query(&self, start: i64, end: i64) -> Result<Vec<Feature>, StoreError>;

    /// Minimum and maximum score across the whole store
    async fn global_stats(&self) -> Result<ScoreStats, StoreError>;
}
