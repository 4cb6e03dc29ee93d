use crate::clusterer::{
    centroid::compute_centroid,
    distance::squared_euclidean,
    types::{Cluster, ClusterResult},
};
use rayon::prelude::*;
use tracing::{debug, info};

/// `ceil(sqrt(n / 2))`, never below 1
pub fn default_cluster_count(n: usize) -> usize {
    ((n as f64 / 2.0).sqrt().ceil() as usize).max(1)
}

/// Euclidean k-means over equal-length vectors.
///
/// Deterministic for a given `seed`. `k` is clamped to `1..=n`. The member
/// lists of the returned clusters partition `0..n`.
pub fn kmeans(vectors: &[Vec<f64>], k: usize, max_iters: usize, seed: u64) -> ClusterResult {
    use rand::{SeedableRng, seq::SliceRandom};
    use rand_chacha::ChaCha8Rng;

    let n = vectors.len();
    if n == 0 {
        return ClusterResult {
            clusters: vec![],
            iterations: 0,
            converged: true,
        };
    }

    let k = k.clamp(1, n);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    // 1. Pick k random input vectors as initial centers
    let mut centroids: Vec<Vec<f64>> = vectors.choose_multiple(&mut rng, k).cloned().collect();

    // usize::MAX = not assigned yet, so the first pass always counts as a change
    let mut assignments = vec![usize::MAX; n];
    let mut iterations = 0;
    let mut converged = false;

    for _ in 0..max_iters.max(1) {
        iterations += 1;

        // 2. Assign each vector to nearest centroid
        let mut next: Vec<usize> = vectors
            .par_iter()
            .map(|v| nearest_centroid(v, &centroids))
            .collect();

        // 3. Give empty clusters a member. Reseeding is deterministic, so a
        // stable partition repeats exactly and is caught below.
        let reseeded = reseed_empty(vectors, &centroids, &mut next, k);
        if reseeded > 0 {
            debug!(iteration = iterations, reseeded, "reseeded empty clusters");
        }

        if next == assignments {
            converged = true;
            break;
        }
        assignments = next;

        // 4. Recompute centroids
        for (c, centroid) in centroids.iter_mut().enumerate() {
            let members: Vec<&[f64]> = vectors
                .iter()
                .zip(assignments.iter())
                .filter(|&(_, a)| *a == c)
                .map(|(v, _)| &v[..])
                .collect();

            if !members.is_empty() {
                *centroid = compute_centroid(&members);
            }
        }
    }

    info!(k, n, iterations, converged, "k-means finished");

    // 5. Build result clusters
    let mut clusters: Vec<Cluster> = centroids
        .into_iter()
        .enumerate()
        .map(|(i, centroid)| Cluster {
            id: i as u32,
            members: vec![],
            centroid,
        })
        .collect();

    for (index, &cluster_idx) in assignments.iter().enumerate() {
        clusters[cluster_idx].members.push(index);
    }

    clusters.retain(|c| !c.members.is_empty());

    ClusterResult {
        clusters,
        iterations,
        converged,
    }
}

/// Index of the closest centroid; ties go to the lowest index
fn nearest_centroid(v: &[f64], centroids: &[Vec<f64>]) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (c, center) in centroids.iter().enumerate() {
        let d = squared_euclidean(v, center);
        if d < best_dist {
            best = c;
            best_dist = d;
        }
    }
    best
}

/// Move the point furthest from its own centroid into each empty cluster,
/// only taking points from clusters that keep at least one member.
/// Returns the number of clusters reseeded.
fn reseed_empty(
    vectors: &[Vec<f64>],
    centroids: &[Vec<f64>],
    assignments: &mut [usize],
    k: usize,
) -> usize {
    let mut counts = vec![0usize; k];
    for &a in assignments.iter() {
        counts[a] += 1;
    }

    let mut reseeded = 0;
    for c in 0..k {
        if counts[c] > 0 {
            continue;
        }

        let mut donor: Option<(usize, f64)> = None;
        for (i, v) in vectors.iter().enumerate() {
            let owner = assignments[i];
            if counts[owner] < 2 {
                continue;
            }
            let d = squared_euclidean(v, &centroids[owner]);
            if donor.map_or(true, |(_, best)| d > best) {
                donor = Some((i, d));
            }
        }

        // With k <= n an empty cluster implies some cluster holds two points.
        if let Some((i, _)) = donor {
            counts[assignments[i]] -= 1;
            assignments[i] = c;
            counts[c] = 1;
            reseeded += 1;
        }
    }

    reseeded
}
