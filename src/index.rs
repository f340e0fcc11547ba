//! Per-dimension sorted-unique coordinate tables (projections) plus the reverse
//! lookup from a table position back to the points that share that coordinate.
//!
//! This is the memory-for-time trade described in the system overview: `O(k*n)` to
//! build, shared read-only across every worker for the lifetime of the engine.

use crate::data::PointCloud;
use crate::types::{PointIndex, ProjectionIndex, Scalar};

/// Built once from a [`PointCloud`]; immutable and safe to share by reference
/// across worker threads without synchronization.
pub struct Index {
    /// `projections[d]` is the strictly ascending, duplicate-free list of values
    /// coordinate `d` takes across the data.
    projections: Vec<Vec<Scalar>>,
    /// `maps[d][t]` is the list of point indices whose `d`th coordinate equals
    /// `projections[d][t]`.
    maps: Vec<Vec<Vec<PointIndex>>>,
}

impl Index {
    /// Build the projection tables and inverse maps for every dimension of `data`.
    pub fn build(data: &PointCloud) -> Self {
        let k = data.k();
        let mut projections: Vec<Vec<Scalar>> = Vec::with_capacity(k);
        let mut maps: Vec<Vec<Vec<PointIndex>>> = Vec::with_capacity(k);

        for d in 0..k {
            let mut values: Vec<Scalar> = data.rows().map(|p| p[d]).collect();
            values.sort_by(|a, b| a.partial_cmp(b).unwrap());
            values.dedup();

            let mut buckets: Vec<Vec<PointIndex>> = vec![Vec::new(); values.len()];
            for (i, p) in data.rows().enumerate() {
                let t = values.partition_point(|v| *v < p[d]);
                buckets[t].push(i);
            }

            projections.push(values);
            maps.push(buckets);
        }

        Index { projections, maps }
    }

    /// The sorted, duplicate-free projection for dimension `d`.
    pub fn projection(&self, d: usize) -> &[Scalar] {
        &self.projections[d]
    }

    /// The points sharing coordinate `d` equal to `projection(d)[t]`.
    pub fn bucket(&self, d: usize, t: ProjectionIndex) -> &[PointIndex] {
        &self.maps[d][t]
    }

    /// Position at which `value` would be inserted into `projection(d)` to keep it sorted.
    pub fn search_sorted(&self, d: usize, value: Scalar) -> ProjectionIndex {
        self.projections[d].partition_point(|v| *v < value)
    }

    /// The smallest observed value in dimension `d`.
    pub fn low(&self, d: usize) -> Scalar {
        *self.projections[d].first().unwrap()
    }

    /// The largest observed value in dimension `d`.
    pub fn high(&self, d: usize) -> Scalar {
        *self.projections[d].last().unwrap()
    }

    /// Number of distinct values observed in dimension `d`.
    pub fn len(&self, d: usize) -> usize {
        self.projections[d].len()
    }

    /// Dimension of the indexed data.
    pub fn k(&self) -> usize {
        self.projections.len()
    }
}
