use super::*;

fn builder(query_length: i64, choice: AnchorChoice, seq_len: i64) -> WindowBuilder {
    WindowBuilder::new(query_length, choice, &RefSequence::new("chr1", seq_len))
}

#[test]
fn test_forward_use_start_centers_on_end() {
    let wb = builder(20, AnchorChoice::UseStart, 10_000);
    let q = wb.build(&AnchorFeature::new(100, 120, Strand::Forward)).unwrap();

    assert_eq!((q.start, q.end), (110, 130));
    assert_eq!(q.directionality, Directionality::Reversed);
}

#[test]
fn test_forward_use_end_centers_on_start() {
    let wb = builder(20, AnchorChoice::UseEnd, 10_000);
    let q = wb.build(&AnchorFeature::new(100, 120, Strand::Forward)).unwrap();

    assert_eq!((q.start, q.end), (90, 110));
    assert_eq!(q.directionality, Directionality::Reversed);
}

#[test]
fn test_reverse_strand_mapping() {
    let anchor = AnchorFeature::new(500, 700, Strand::Reverse);

    let q = builder(100, AnchorChoice::UseStart, 10_000).build(&anchor).unwrap();
    assert_eq!((q.start, q.end), (450, 550));
    assert_eq!(q.directionality, Directionality::Forward);

    let q = builder(100, AnchorChoice::UseEnd, 10_000).build(&anchor).unwrap();
    assert_eq!((q.start, q.end), (650, 750));
    assert_eq!(q.directionality, Directionality::Forward);
}

#[test]
fn test_unknown_strand_is_rejected() {
    let wb = builder(20, AnchorChoice::UseStart, 10_000);
    let err = wb
        .build(&AnchorFeature::new(5, 15, Strand::Unknown))
        .unwrap_err();
    assert_eq!(err, OrientationUnknown { start: 5, end: 15 });
}

#[test]
fn test_window_is_symmetric_when_unclamped() {
    let wb = builder(1000, AnchorChoice::UseEnd, 1_000_000);
    for (start, end, strand) in [
        (10_000, 12_000, Strand::Forward),
        (40_000, 40_001, Strand::Reverse),
        (77_777, 90_000, Strand::Reverse),
    ] {
        let anchor = AnchorFeature::new(start, end, strand);
        let q = wb.build(&anchor).unwrap();
        let center = match strand {
            Strand::Forward => start,
            _ => end,
        };
        assert_eq!(q.len(), 1000);
        assert_eq!(center - q.start, q.end - center);
    }
}

#[test]
fn test_odd_length_is_preserved() {
    let wb = builder(21, AnchorChoice::UseStart, 10_000);
    let q = wb.build(&AnchorFeature::new(100, 200, Strand::Reverse)).unwrap();
    assert_eq!(q.len(), 21);
    assert_eq!(q.start, 90);
}

#[test]
fn test_clamp_left_edge_shifts_right() {
    let wb = builder(100, AnchorChoice::UseStart, 10_000);
    let q = wb.build(&AnchorFeature::new(10, 40, Strand::Reverse)).unwrap();
    assert_eq!((q.start, q.end), (0, 100));
}

#[test]
fn test_clamp_right_edge_shifts_left() {
    let wb = builder(100, AnchorChoice::UseStart, 1_000);
    let q = wb.build(&AnchorFeature::new(900, 990, Strand::Forward)).unwrap();
    assert_eq!((q.start, q.end), (900, 1_000));
}

#[test]
fn test_clamped_windows_stay_in_bounds() {
    let seq_len = 500;
    for query_length in [1, 2, 99, 100, 250, 500] {
        let wb = builder(query_length, AnchorChoice::UseStart, seq_len);
        for pos in (0..seq_len).step_by(7) {
            for strand in [Strand::Forward, Strand::Reverse] {
                let q = wb.build(&AnchorFeature::new(pos, pos + 1, strand)).unwrap();
                assert!(0 <= q.start && q.start < q.end && q.end <= seq_len, "{q:?}");
                assert_eq!(q.len(), query_length);
            }
        }
    }
}

#[test]
fn test_display_span_follows_directionality() {
    let fwd = QueryInterval::new(10, 20, Directionality::Forward);
    let rev = QueryInterval::new(10, 20, Directionality::Reversed);
    assert_eq!(fwd.display_span(), (10, 20));
    assert_eq!(rev.display_span(), (20, 10));
}

#[test]
fn test_strand_tokens() {
    assert_eq!(Strand::from_token("+"), Strand::Forward);
    assert_eq!(Strand::from_token("1"), Strand::Forward);
    assert_eq!(Strand::from_token("-"), Strand::Reverse);
    assert_eq!(Strand::from_token("-1"), Strand::Reverse);
    assert_eq!(Strand::from_token("."), Strand::Unknown);
    assert_eq!(Strand::from_token(""), Strand::Unknown);
}
