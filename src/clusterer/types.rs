use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cluster {
    pub id: u32,
    /// Indices into the clustered input, ascending
    pub members: Vec<usize>,
    pub centroid: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterResult {
    pub clusters: Vec<Cluster>,
    pub iterations: usize,
    /// False when the iteration bound was hit first
    pub converged: bool,
}
