use super::types::ClusterResult;
use crate::codec::{CodecError, VectorCodec};
use crate::heatmap::Heatmap;
use serde::Serialize;

/// Presentation unit for one cluster: its average heatmap and its members
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClusterHeatmap {
    pub id: u32,
    pub size: usize,
    /// Decoded centroid; has no region
    pub centroid: Heatmap,
    pub member_indices: Vec<usize>,
    pub members: Vec<Heatmap>,
}

/// Decode every centroid back to score space and attach the heatmaps it
/// was built from. `heatmaps` must be the list that was encoded and clustered.
pub fn reconstruct(
    result: &ClusterResult,
    codec: &VectorCodec,
    heatmaps: &[Heatmap],
) -> Result<Vec<ClusterHeatmap>, CodecError> {
    result
        .clusters
        .iter()
        .map(|cluster| {
            let centroid = codec.decode(&cluster.centroid, None)?;
            let members: Vec<Heatmap> = cluster
                .members
                .iter()
                .filter_map(|&i| heatmaps.get(i).cloned())
                .collect();

            Ok(ClusterHeatmap {
                id: cluster.id,
                size: members.len(),
                centroid,
                member_indices: cluster.members.clone(),
                members,
            })
        })
        .collect()
}
