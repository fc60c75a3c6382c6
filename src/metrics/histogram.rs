//! Frequency histograms over return multiples.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Width of a histogram bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketWidth {
    /// Integer floor: 2.7x lands in bucket 2.
    Whole,
    /// Rounded to one decimal: 2.74x lands in bucket 2.7.
    Tenth,
}

impl BucketWidth {
    /// Buckets per unit of multiple.
    #[inline]
    fn scale(self) -> f64 {
        match self {
            BucketWidth::Whole => 1.0,
            BucketWidth::Tenth => 10.0,
        }
    }

    /// Integer key of the bucket containing `multiple`.
    pub fn key(self, multiple: f64) -> i64 {
        match self {
            BucketWidth::Whole => multiple.floor() as i64,
            BucketWidth::Tenth => round_to_tenth(multiple),
        }
    }
}

/// Key of the nearest one-decimal value, in tenths.
///
/// Rounds the exact binary value with ties to even, so 0.35 (stored just
/// below 0.35) lands in 0.3 and an exact 0.25 lands in 0.2. Scaling by ten
/// first would round both up.
fn round_to_tenth(multiple: f64) -> i64 {
    let rounded = format!("{:.1}", multiple)
        .parse::<f64>()
        .unwrap_or(multiple);
    (rounded * 10.0).round() as i64
}

/// A single histogram row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bucket {
    /// Lower edge (whole) or rounded value (tenth) of the bucket.
    pub value: f64,
    pub count: usize,
    /// Share of all samples, in percent.
    pub pct: f64,
    /// Running share up to and including this bucket, in percent.
    pub cumulative_pct: f64,
}

/// Count of multiples per bucket, ascending by bucket value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub width: BucketWidth,
    pub total: usize,
    pub buckets: Vec<Bucket>,
}

impl Histogram {
    pub fn from_multiples(multiples: &[f64], width: BucketWidth) -> Self {
        let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
        for &m in multiples {
            *counts.entry(width.key(m)).or_insert(0) += 1;
        }

        let total = multiples.len();
        let mut cumulative_pct = 0.0;
        let buckets = counts
            .into_iter()
            .map(|(key, count)| {
                let pct = 100.0 * count as f64 / total as f64;
                cumulative_pct += pct;
                Bucket {
                    value: key as f64 / width.scale(),
                    count,
                    pct,
                    cumulative_pct,
                }
            })
            .collect();

        Self {
            width,
            total,
            buckets,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_buckets_floor() {
        let h = Histogram::from_multiples(&[2.7, 2.1, 0.4, 3.0, 0.99], BucketWidth::Whole);
        let rows: Vec<(f64, usize)> = h.buckets.iter().map(|b| (b.value, b.count)).collect();
        assert_eq!(rows, vec![(0.0, 2), (2.0, 2), (3.0, 1)]);
        assert_eq!(h.total, 5);
    }

    #[test]
    fn test_tenth_buckets_round() {
        let h = Histogram::from_multiples(&[2.74, 2.66, 0.04, 1.26], BucketWidth::Tenth);
        let keys: Vec<i64> = [2.74, 2.66, 0.04, 1.26]
            .iter()
            .map(|&m| BucketWidth::Tenth.key(m))
            .collect();
        assert_eq!(keys, vec![27, 27, 0, 13]);
        assert_eq!(h.buckets.len(), 3);
        assert_eq!(h.buckets[2].count, 2);
        assert!((h.buckets[2].value - 2.7).abs() < 1e-12);
    }

    #[test]
    fn test_tenth_ties_use_exact_value() {
        // 0.25 is exact and rounds to even; 0.35 is stored as 0.3499...
        assert_eq!(BucketWidth::Tenth.key(0.25), 2);
        assert_eq!(BucketWidth::Tenth.key(0.35), 3);
        assert_eq!(BucketWidth::Tenth.key(66.5 / 70.0), 9);
        assert_eq!(BucketWidth::Tenth.key(0.15000001), 2);

        let h = Histogram::from_multiples(&[66.5 / 70.0, 0.25, 0.35], BucketWidth::Tenth);
        let values: Vec<f64> = h.buckets.iter().map(|b| b.value).collect();
        assert_eq!(values, vec![0.2, 0.3, 0.9]);
    }

    #[test]
    fn test_cumulative_reaches_hundred() {
        let values: Vec<f64> = (0..250).map(|i| (i % 37) as f64 * 0.13).collect();
        let h = Histogram::from_multiples(&values, BucketWidth::Tenth);
        let last = h.buckets.last().unwrap();
        assert!((last.cumulative_pct - 100.0).abs() < 1e-9);
        assert!(h.buckets.windows(2).all(|w| w[0].value < w[1].value));
    }

    #[test]
    fn test_empty_input() {
        let h = Histogram::from_multiples(&[], BucketWidth::Whole);
        assert!(h.is_empty());
        assert_eq!(h.total, 0);
    }
}
