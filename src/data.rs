//! The immutable point cloud the engine searches over.

use crate::errors::Result;
use crate::types::{PointIndex, Scalar};
use crate::util::{check_nonempty_dataset, check_same_dimension};

/// An immutable `n x k` matrix of real numbers, stored row-major in a single flat
/// buffer rather than as `Vec<Vec<Scalar>>` — one contiguous allocation instead of
/// `n` pointer-chasing heap allocations.
#[repr(C)]
#[derive(Debug, Clone)]
pub struct PointCloud {
    n: usize,
    k: usize,
    values: Vec<Scalar>,
}

impl PointCloud {
    /// Build a point cloud from row-major data. Every row must have the same length
    /// `k`, and both `n` and `k` must be positive.
    pub fn from_rows(rows: &[Vec<Scalar>]) -> Result<Self> {
        check_nonempty_dataset(rows.len(), rows.first().map_or(0, Vec::len))?;
        let k = rows[0].len();
        for row in rows {
            check_same_dimension(k, row.len())?;
        }
        let mut values = Vec::with_capacity(rows.len() * k);
        for row in rows {
            values.extend_from_slice(row);
        }
        Ok(PointCloud { n: rows.len(), k, values })
    }

    /// Number of points.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Dimension of each point.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The `i`th point as a slice of length `k`.
    pub fn row(&self, i: PointIndex) -> &[Scalar] {
        let start = i * self.k;
        &self.values[start..start + self.k]
    }

    /// Iterate over all points.
    pub fn rows(&self) -> impl Iterator<Item = &[Scalar]> {
        self.values.chunks_exact(self.k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_dataset() {
        let rows: Vec<Vec<Scalar>> = vec![];
        assert!(PointCloud::from_rows(&rows).is_err());
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![0.0, 1.0], vec![0.0]];
        assert!(PointCloud::from_rows(&rows).is_err());
    }

    #[test]
    fn round_trips_rows() {
        let rows = vec![vec![0.0, 1.0], vec![2.0, 3.0]];
        let cloud = PointCloud::from_rows(&rows).unwrap();
        assert_eq!(cloud.n(), 2);
        assert_eq!(cloud.k(), 2);
        assert_eq!(cloud.row(1), &[2.0, 3.0]);
    }
}
