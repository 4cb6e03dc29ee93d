mod aggregator;
mod bins;
mod types;

#[cfg(test)]
mod tests;

pub use aggregator::HeatmapAggregator;
pub use bins::BinAccumulator;
pub use types::{Heatmap, StoreRow};
