use crate::engine::query::histogram::Histogram;

#[test]
fn increment_inserts_then_accumulates() {
    let mut h = Histogram::new();
    h.increment(10_000);
    h.increment(10_000);
    h.increment(0);
    assert_eq!(h.count_of(10_000), 2);
    assert_eq!(h.count_of(0), 1);
    assert_eq!(h.size(), 2);
    assert_eq!(h.total(), 3);
}

#[test]
fn snapshot_is_ascending_regardless_of_insert_order() {
    let mut h = Histogram::new();
    for bucket in [20_000, 0, 10_000, 20_000] {
        h.increment(bucket);
    }
    assert_eq!(h.snapshot(), vec![(0, 1), (10_000, 1), (20_000, 2)]);
}

#[test]
fn empty_histogram_reports_zeroes() {
    let h = Histogram::new();
    assert!(h.is_empty());
    assert_eq!(h.size(), 0);
    assert_eq!(h.count_of(0), 0);
    assert_eq!(h.total(), 0);
    assert!(h.snapshot().is_empty());
}

#[test]
fn invalid_rows_count_toward_total_only() {
    let mut h = Histogram::new();
    h.increment(0);
    h.increment_invalid();
    h.increment_invalid();
    assert_eq!(h.size(), 1);
    assert_eq!(h.invalid(), 2);
    assert_eq!(h.total(), 3);
    assert_eq!(h.snapshot(), vec![(0, 1)]);
}

#[test]
fn absent_key_counts_zero() {
    let mut h = Histogram::new();
    h.increment(30_000);
    assert_eq!(h.count_of(0), 0);
    assert_eq!(h.count_of(-10_000), 0);
}
