mod centroid;
mod distance;
mod kmeans;
mod reconstruct;
mod types;


pub use distance::{euclidean_distance, squared_euclidean};
pub use kmeans::{default_cluster_count, kmeans};
pub use reconstruct::{ClusterHeatmap, reconstruct};
pub use types::{Cluster, ClusterResult};
