mod config;
mod report;


pub use config::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_NUM_OF_BINS, DEFAULT_QUERY_LENGTH, DEFAULT_SEED, RowLabel,
    RunConfig, TrackName,
};
pub use report::{ClusteringOutcome, RunIssue, RunSummary};

use crate::clusterer::{default_cluster_count, kmeans, reconstruct};
use crate::codec::VectorCodec;
use crate::error::ClusteringError;
use crate::heatmap::{Heatmap, HeatmapAggregator};
use crate::stats::StatsCache;
use crate::store::{FeatureStore, StoreError, StoreRegistry};
use crate::window::{AnchorFeature, QueryInterval, RefSequence, WindowBuilder};
use chrono::Utc;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{Instrument, info, info_span, warn};
use uuid::Uuid;

/// One clustering invocation over a reference sequence
///
/// Owns nothing that outlives [`run`](Self::run): the stats cache, windows
/// and heatmaps are created per call and dropped with it.
pub struct RegionClustering {
    config: RunConfig,
    sequence: RefSequence,
    registry: StoreRegistry,
}

impl RegionClustering {
    pub fn new(config: RunConfig, sequence: RefSequence, registry: StoreRegistry) -> Self {
        Self {
            config,
            sequence,
            registry,
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run the whole pipeline: anchors, windows, heatmaps, stats,
    /// normalization, k-means and reconstruction.
    pub async fn run(&self) -> Result<ClusteringOutcome, ClusteringError> {
        let run_id = Uuid::new_v4();
        let span = info_span!("clustering_run", %run_id, sequence = %self.sequence.name);
        self.execute(run_id).instrument(span).await
    }

    async fn execute(&self, run_id: Uuid) -> Result<ClusteringOutcome, ClusteringError> {
        let config = &self.config;
        config.validate(&self.registry, &self.sequence)?;

        let display = self
            .registry
            .resolve(&config.display_stores)
            .map_err(|e| ClusteringError::InvalidConfiguration(e.to_string()))?;
        let region_stores = self
            .registry
            .resolve(&config.region_stores)
            .map_err(|e| ClusteringError::InvalidConfiguration(e.to_string()))?;

        let mut summary = RunSummary::default();

        // 1. Collect anchors from every region store
        let anchors = scan_anchors(&region_stores, &self.sequence, &mut summary).await;
        summary.anchors_found = anchors.len();
        info!(anchors = anchors.len(), "anchor scan complete");

        // 2. Derive query windows
        let builder = WindowBuilder::new(
            i64::from(config.query_length),
            config.anchor_choice,
            &self.sequence,
        );
        let mut regions: Vec<QueryInterval> = Vec::with_capacity(anchors.len());
        for (store, anchor) in &anchors {
            match builder.build(anchor) {
                Ok(region) => regions.push(region),
                Err(e) => {
                    warn!(store = %store, start = anchor.start, end = anchor.end, "{}", e);
                    summary.anchors_skipped += 1;
                    summary.issues.push(RunIssue::OrientationUnknown {
                        store: store.clone(),
                        start: anchor.start,
                        end: anchor.end,
                    });
                }
            }
        }
        summary.regions_queried = regions.len();

        // 3. Build heatmaps and fetch stats side by side
        let aggregator = HeatmapAggregator::new(display.clone(), config.num_of_bins);
        let mut stats = StatsCache::new();
        // A stats failure ends the run without waiting on the heatmaps.
        let (outcomes, ()) = tokio::try_join!(
            async { Ok::<_, ClusteringError>(aggregator.build_many(&regions).await) },
            async {
                stats
                    .fetch_all(&display)
                    .await
                    .map_err(ClusteringError::StatsUnavailable)
            },
        )?;

        let mut heatmaps: Vec<Heatmap> = Vec::with_capacity(outcomes.len());
        for (region, outcome) in outcomes {
            match outcome {
                Ok(heatmap) => heatmaps.push(heatmap),
                Err(e) => {
                    warn!(start = region.start, end = region.end, error = %e, "heatmap dropped");
                    summary.heatmaps_failed += 1;
                    summary.issues.push(RunIssue::StoreQueryFailed {
                        store: failed_store(&e),
                        region: Some(region),
                        message: e.to_string(),
                    });
                }
            }
        }
        summary.heatmaps_built = heatmaps.len();

        if heatmaps.is_empty() {
            return Err(ClusteringError::NoData {
                failed: summary.heatmaps_failed,
            });
        }

        // 4. Normalize
        let codec = VectorCodec::new(&config.display_stores, &stats, config.num_of_bins)?;
        let vectors = heatmaps
            .iter()
            .map(|h| codec.encode(h))
            .collect::<Result<Vec<_>, _>>()?;

        // 5. Cluster
        let k = config
            .num_clusters
            .unwrap_or_else(|| default_cluster_count(vectors.len()));
        info!(heatmaps = vectors.len(), k, "clustering heatmaps");
        let result = kmeans(&vectors, k, config.max_iterations, config.seed);

        // 6. Back to score space
        let clusters = reconstruct(&result, &codec, &heatmaps)?;

        Ok(ClusteringOutcome {
            run_id,
            created_at: Utc::now(),
            generator: format!("regionclust v{}", env!("CARGO_PKG_VERSION")),
            sequence: self.sequence.clone(),
            config: config.clone(),
            row_labels: config.row_labels(),
            iterations: result.iterations,
            converged: result.converged,
            clusters,
            summary,
        })
    }
}

/// Query every region store over the whole sequence. Failed stores are
/// recorded in `summary` and skipped.
async fn scan_anchors(
    stores: &[Arc<dyn FeatureStore>],
    sequence: &RefSequence,
    summary: &mut RunSummary,
) -> Vec<(String, AnchorFeature)> {
    let results = join_all(stores.iter().map(|s| s.range_query(0, sequence.length))).await;

    let mut anchors = Vec::new();
    for (store, result) in stores.iter().zip(results) {
        match result {
            Ok(features) => anchors.extend(features.into_iter().map(|f| {
                (
                    store.name().to_string(),
                    AnchorFeature::new(f.start, f.end, f.strand),
                )
            })),
            Err(e) => {
                warn!(store = store.name(), error = %e, "anchor scan failed");
                summary.issues.push(RunIssue::StoreQueryFailed {
                    store: store.name().to_string(),
                    region: None,
                    message: e.to_string(),
                });
            }
        }
    }
    anchors
}

fn failed_store(err: &StoreError) -> String {
    match err {
        StoreError::QueryFailed { store, .. } => store.clone(),
        _ => String::new(),
    }
}
