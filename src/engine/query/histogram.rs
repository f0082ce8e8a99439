use std::collections::BTreeMap;

/// Row counts per bucket key, iterated in ascending key order.
///
/// Rows without a valid bucket (non-finite magnitude) are tallied in a
/// separate counter so they never appear as keys, keeping
/// `total() == rows scanned`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: BTreeMap<i64, u64>,
    invalid: u64,
}

impl Histogram {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn increment(&mut self, bucket: i64) {
        *self.counts.entry(bucket).or_insert(0) += 1;
    }

    #[inline]
    pub fn increment_invalid(&mut self) {
        self.invalid += 1;
    }

    /// Count for `bucket`; absent keys count zero.
    pub fn count_of(&self, bucket: i64) -> u64 {
        self.counts.get(&bucket).copied().unwrap_or(0)
    }

    /// Number of distinct buckets.
    pub fn size(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Rows that had no valid bucket.
    pub fn invalid(&self) -> u64 {
        self.invalid
    }

    /// All rows counted, valid or not.
    pub fn total(&self) -> u64 {
        self.counts.values().sum::<u64>() + self.invalid
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, u64)> + '_ {
        self.counts.iter().map(|(k, v)| (*k, *v))
    }

    /// `(bucket, count)` pairs in ascending bucket order.
    pub fn snapshot(&self) -> Vec<(i64, u64)> {
        self.iter().collect()
    }
}
