use crate::error::ParcoordsScaleError;
use crate::transform::stats::{quantile_sorted, sorted_finite};

/// A quantile scale bins continuous values into equal-frequency buckets.
///
/// Bucket edges are the sample quantiles at `i / count` for `i` in `0..=count`,
/// computed with linear interpolation between order statistics. Duplicate edges
/// are dropped, so heavily tied samples yield fewer buckets than requested.
/// Buckets are right-closed and the lowest edge belongs to the first bucket.
#[derive(Debug, Clone)]
pub struct QuantileScale {
    edges: Vec<f32>,
}

impl QuantileScale {
    pub fn try_new(sample: &[f32], count: usize) -> Result<Self, ParcoordsScaleError> {
        if count == 0 {
            return Err(ParcoordsScaleError::InvalidQuantileCount);
        }
        let sorted = sorted_finite(sample);
        if sorted.is_empty() {
            return Err(ParcoordsScaleError::EmptyDomain);
        }

        let mut edges: Vec<f32> = (0..=count)
            .map(|i| quantile_sorted(&sorted, i as f32 / count as f32))
            .collect();
        edges.dedup();

        Ok(Self { edges })
    }

    /// Bucket edges after duplicate removal
    pub fn edges(&self) -> &[f32] {
        &self.edges
    }

    /// Number of buckets described by the edges
    pub fn bucket_count(&self) -> usize {
        self.edges.len().saturating_sub(1).max(1)
    }

    /// Bucket index for a value, monotonically non-decreasing in the value
    pub fn bucket(&self, x: f32) -> usize {
        let idx = self.edges.partition_point(|edge| *edge < x);
        idx.saturating_sub(1).min(self.bucket_count() - 1)
    }

    pub fn scale(&self, values: &[f32]) -> Vec<usize> {
        values.iter().map(|v| self.bucket(*v)).collect()
    }
}
