/// Coordinate-wise mean of equal-length vectors. `vectors` must be non-empty.
pub fn compute_centroid(vectors: &[&[f64]]) -> Vec<f64> {
    let dim = vectors[0].len();
    let mut out = vec![0.0; dim];

    for v in vectors {
        for (acc, x) in out.iter_mut().zip(v.iter()) {
            *acc += x;
        }
    }

    let n = vectors.len() as f64;
    for x in out.iter_mut() {
        *x /= n;
    }

    out
}
