use super::CodecError;
use crate::heatmap::{Heatmap, StoreRow};
use crate::stats::StatsCache;
use crate::store::ScoreStats;
use crate::window::QueryInterval;

/// Flattens heatmaps into normalized vectors and back
///
/// The store order is fixed at construction and used for both directions,
/// so a vector's `i`-th block of `num_bins` values always belongs to the
/// `i`-th store.
#[derive(Debug, Clone)]
pub struct VectorCodec {
    stores: Vec<(String, ScoreStats)>,
    num_bins: usize,
}

impl VectorCodec {
    /// Pair each store in `order` with its cached bounds.
    ///
    /// Fails if a store has no stats or its bounds cannot normalize
    /// (`max == min` or non-finite).
    pub fn new(order: &[String], stats: &StatsCache, num_bins: usize) -> Result<Self, CodecError> {
        let stores = order
            .iter()
            .map(|name| {
                let s = stats
                    .get(name)
                    .ok_or_else(|| CodecError::MissingStats(name.clone()))?;
                if !s.is_usable() {
                    return Err(CodecError::DegenerateNormalization {
                        store: name.clone(),
                        min: s.score_min,
                        max: s.score_max,
                    });
                }
                Ok((name.clone(), s))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { stores, num_bins })
    }

    /// Length of every encoded vector
    pub fn dim(&self) -> usize {
        self.stores.len() * self.num_bins
    }

    pub fn num_bins(&self) -> usize {
        self.num_bins
    }

    /// `(v - min) / (max - min)` per bin, rows concatenated in store order.
    /// Values outside the cached bounds are not clamped.
    pub fn encode(&self, heatmap: &Heatmap) -> Result<Vec<f64>, CodecError> {
        if heatmap.rows.len() != self.stores.len() {
            return Err(CodecError::LengthMismatch {
                expected: self.stores.len(),
                found: heatmap.rows.len(),
            });
        }

        let mut out = Vec::with_capacity(self.dim());
        for (index, ((name, stats), row)) in self.stores.iter().zip(&heatmap.rows).enumerate() {
            if &row.store != name {
                return Err(CodecError::RowMismatch {
                    index,
                    expected: name.clone(),
                    found: row.store.clone(),
                });
            }
            if row.values.len() != self.num_bins {
                return Err(CodecError::LengthMismatch {
                    expected: self.num_bins,
                    found: row.values.len(),
                });
            }
            let range = stats.range();
            out.extend(row.values.iter().map(|v| (v - stats.score_min) / range));
        }

        Ok(out)
    }

    /// Inverse of [`encode`](Self::encode): `v * (max - min) + min`
    pub fn decode(
        &self,
        vector: &[f64],
        region: Option<QueryInterval>,
    ) -> Result<Heatmap, CodecError> {
        if vector.len() != self.dim() {
            return Err(CodecError::LengthMismatch {
                expected: self.dim(),
                found: vector.len(),
            });
        }

        let rows = self
            .stores
            .iter()
            .zip(vector.chunks(self.num_bins.max(1)))
            .map(|((name, stats), block)| StoreRow {
                store: name.clone(),
                values: block
                    .iter()
                    .map(|v| v * stats.range() + stats.score_min)
                    .collect(),
            })
            .collect();

        Ok(Heatmap { region, rows })
    }
}
