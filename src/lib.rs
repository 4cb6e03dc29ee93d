// Public API exports
pub mod clusterer;
pub mod codec;
pub mod error;
pub mod heatmap;
pub mod pipeline;
pub mod stats;
pub mod store;
pub mod window;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use error::ClusteringError;

pub use window::{
    AnchorChoice, AnchorFeature, Directionality, OrientationUnknown, QueryInterval, RefSequence,
    Strand, WindowBuilder,
};

pub use store::{
    Feature, FeatureStore, InMemoryStore, InMemoryStoreBuilder, ScoreStats, StoreError,
    StoreRegistry, load_bed, load_bedgraph,
};

pub use heatmap::{BinAccumulator, Heatmap, HeatmapAggregator, StoreRow};

pub use stats::StatsCache;

pub use codec::{CodecError, VectorCodec};

pub use clusterer::{
    Cluster, ClusterHeatmap, ClusterResult, default_cluster_count, kmeans, reconstruct,
};

pub use pipeline::{
    ClusteringOutcome, RegionClustering, RowLabel, RunConfig, RunIssue, RunSummary, TrackName,
};
