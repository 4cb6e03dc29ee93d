use super::*;
use crate::store::FeatureStore;
use crate::testing::{FailingStore, signal};
use crate::window::{Directionality, QueryInterval};
use std::sync::Arc;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_feature_inside_one_bin() {
    let mut acc = BinAccumulator::new(0, 100, 10);
    acc.add(12, 17, 4.0);

    assert!(approx_eq(acc.sums()[1], 4.0 * 5.0));
    assert_eq!(acc.sums().iter().filter(|&&s| s != 0.0).count(), 1);
}

#[test]
fn test_coverage_is_conserved_across_bins() {
    let mut acc = BinAccumulator::new(1_000, 2_000, 7);
    // starts before the interval; only 1_000..1_650 lies inside
    acc.add(900, 1_650, 3.0);

    let total: f64 = acc.sums().iter().sum();
    assert!(approx_eq(total, 3.0 * 650.0), "total = {total}");
}

#[test]
fn test_feature_outside_interval_is_ignored() {
    let mut acc = BinAccumulator::new(100, 200, 4);
    acc.add(0, 100, 9.0);
    acc.add(200, 300, 9.0);
    assert!(acc.sums().iter().all(|&s| s == 0.0));
}

#[test]
fn test_averaging_and_reversal() {
    let mut acc = BinAccumulator::new(0, 10, 2);
    acc.add(0, 5, 10.0);
    assert_eq!(acc.clone().finish(false), vec![10.0, 0.0]);
    assert_eq!(acc.finish(true), vec![0.0, 10.0]);
}

#[test]
fn test_overlapping_features_are_summed() {
    let mut acc = BinAccumulator::new(0, 10, 1);
    acc.add(0, 10, 1.0);
    acc.add(0, 5, 2.0);
    assert_eq!(acc.finish(false), vec![2.0]);
}

#[tokio::test]
async fn test_two_store_example() {
    let stores: Vec<Arc<dyn FeatureStore>> = vec![
        Arc::new(signal("a", &[(0, 5, 10.0)])),
        Arc::new(signal("b", &[])),
    ];
    let aggregator = HeatmapAggregator::new(stores, 2);

    let region = QueryInterval::new(0, 10, Directionality::Forward);
    let hm = aggregator.build(region).await.unwrap();

    assert_eq!(hm.region, Some(region));
    assert_eq!(hm.num_bins(), 2);
    assert_eq!(hm.row("a"), Some(&[10.0, 0.0][..]));
    assert_eq!(hm.row("b"), Some(&[0.0, 0.0][..]));
    assert_eq!(aggregator.store_names(), vec!["a", "b"]);
}

#[tokio::test]
async fn test_reversed_region_flips_every_row() {
    let stores: Vec<Arc<dyn FeatureStore>> = vec![
        Arc::new(signal("a", &[(0, 25, 4.0)])),
        Arc::new(signal("b", &[(75, 100, 8.0)])),
    ];
    let aggregator = HeatmapAggregator::new(stores, 4);

    let hm = aggregator
        .build(QueryInterval::new(0, 100, Directionality::Reversed))
        .await
        .unwrap();

    assert_eq!(hm.row("a"), Some(&[0.0, 0.0, 0.0, 4.0][..]));
    assert_eq!(hm.row("b"), Some(&[8.0, 0.0, 0.0, 0.0][..]));
    assert_eq!(hm.display_span(), Some((100, 0)));
}

#[tokio::test]
async fn test_store_failure_fails_every_affected_heatmap() {
    let stores: Vec<Arc<dyn FeatureStore>> = vec![
        Arc::new(signal("a", &[(0, 10, 1.0)])),
        Arc::new(FailingStore::queries("broken")),
    ];
    let aggregator = HeatmapAggregator::new(stores, 2);

    let outcomes = aggregator
        .build_many(&[
            QueryInterval::new(0, 10, Directionality::Forward),
            QueryInterval::new(10, 20, Directionality::Forward),
        ])
        .await;

    assert_eq!(outcomes.len(), 2);
    assert!(outcomes.iter().all(|(_, r)| r.is_err()));
    assert_eq!(outcomes[1].0.start, 10);
}

#[tokio::test]
async fn test_build_many_preserves_region_order() {
    let stores: Vec<Arc<dyn FeatureStore>> = vec![Arc::new(signal("a", &[(0, 50, 2.0)]))];
    let aggregator = HeatmapAggregator::new(stores, 5);
    let regions: Vec<QueryInterval> = (0..4)
        .map(|i| QueryInterval::new(i * 10, i * 10 + 10, Directionality::Forward))
        .collect();

    let outcomes = aggregator.build_many(&regions).await;
    let starts: Vec<i64> = outcomes.iter().map(|(r, _)| r.start).collect();
    assert_eq!(starts, vec![0, 10, 20, 30]);
    for (_, result) in outcomes {
        let hm = result.unwrap();
        assert_eq!(hm.row("a"), Some(&[2.0; 5][..]));
    }
}
