use super::bins::BinAccumulator;
use super::types::{Heatmap, StoreRow};
use crate::store::{FeatureStore, StoreError};
use crate::window::{Directionality, QueryInterval};
use futures::future::join_all;
use std::sync::Arc;
use tracing::debug;

/// Builds heatmaps for query intervals from a fixed, ordered set of stores
#[derive(Clone)]
pub struct HeatmapAggregator {
    stores: Vec<Arc<dyn FeatureStore>>,
    num_bins: usize,
}

impl HeatmapAggregator {
    pub fn new(stores: Vec<Arc<dyn FeatureStore>>, num_bins: usize) -> Self {
        Self { stores, num_bins }
    }

    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    pub fn store_names(&self) -> Vec<String> {
        self.stores.iter().map(|s| s.name().to_string()).collect()
    }

    /// Query every store over `region` and bin the results.
    ///
    /// Fails as a whole if any single store query fails.
    pub async fn build(&self, region: QueryInterval) -> Result<Heatmap, StoreError> {
        let queries = self
            .stores
            .iter()
            .map(|store| store.range_query(region.start, region.end));
        let results = join_all(queries).await;

        let reverse = region.directionality == Directionality::Reversed;
        let mut rows = Vec::with_capacity(self.stores.len());

        for (store, result) in self.stores.iter().zip(results) {
            let features = result.map_err(|e| match e {
                StoreError::QueryFailed { .. } => e,
                other => StoreError::QueryFailed {
                    store: store.name().to_string(),
                    message: other.to_string(),
                },
            })?;
            let mut acc = BinAccumulator::new(region.start, region.end, self.num_bins);
            for f in &features {
                acc.add(f.start, f.end, f.score);
            }
            debug!(
                store = store.name(),
                start = region.start,
                end = region.end,
                features = features.len(),
                "binned region"
            );
            rows.push(StoreRow {
                store: store.name().to_string(),
                values: acc.finish(reverse),
            });
        }

        Ok(Heatmap {
            region: Some(region),
            rows,
        })
    }

    /// Build heatmaps for all regions concurrently, keeping each outcome
    /// next to the region it was built for.
    pub async fn build_many(
        &self,
        regions: &[QueryInterval],
    ) -> Vec<(QueryInterval, Result<Heatmap, StoreError>)> {
        let builds = regions.iter().map(|&region| async move {
            let result = self.build(region).await;
            (region, result)
        });
        join_all(builds).await
    }
}
