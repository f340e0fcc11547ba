//! Axis-aligned hyper-rectangle with the strict-interior predicates the expansion
//! strategies and the search driver rely on.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::data::PointCloud;
use crate::errors::Result;
use crate::types::Scalar;
use crate::util::check_same_dimension;

/// An axis-aligned box described by a lower and upper bound per dimension,
/// with the invariant `L[i] <= U[i]` for every `i`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HyperRectangle {
    l: Vec<Scalar>,
    u: Vec<Scalar>,
}

impl HyperRectangle {
    /// Build a rectangle from explicit bounds. Does not validate `l[i] <= u[i]`;
    /// callers that construct rectangles outside the expansion strategies (tests,
    /// deserialization) are expected to pass consistent bounds.
    pub fn new(l: Vec<Scalar>, u: Vec<Scalar>) -> Self {
        debug_assert_eq!(l.len(), u.len());
        HyperRectangle { l, u }
    }

    /// Dimension of the rectangle.
    pub fn k(&self) -> usize {
        self.l.len()
    }

    /// Lower bounds.
    pub fn lower(&self) -> &[Scalar] {
        &self.l
    }

    /// Upper bounds.
    pub fn upper(&self) -> &[Scalar] {
        &self.u
    }

    /// Product of the per-dimension widths. Zero (a degenerate rectangle) is legal.
    pub fn volume(&self) -> Scalar {
        self.l.iter().zip(&self.u).map(|(lo, hi)| hi - lo).product()
    }

    /// True iff `point` lies strictly inside on every dimension.
    pub fn contains(&self, point: &[Scalar]) -> bool {
        self.l
            .iter()
            .zip(&self.u)
            .zip(point)
            .all(|((lo, hi), p)| lo < p && p < hi)
    }

    /// True iff no point of `data` lies in the interior.
    pub fn is_empty(&self, data: &PointCloud) -> bool {
        data.rows().all(|p| !self.contains(p))
    }

    /// True iff `point` lies strictly inside on every dimension *other than* `d`.
    /// Points sitting exactly on a non-`d` face do not count as in the way, mirroring
    /// the strict-interior semantics of [`HyperRectangle::contains`].
    pub fn in_way(&self, point: &[Scalar], d: usize) -> bool {
        self.l
            .iter()
            .zip(&self.u)
            .zip(point)
            .enumerate()
            .all(|(i, ((lo, hi), p))| i == d || (lo < p && p < hi))
    }

    /// Move the lower face of dimension `d` to `v`. Used internally by the
    /// expansion strategies while growing a seed; not part of the public API
    /// because a rectangle is conceptually immutable once handed to a caller.
    pub(crate) fn set_lower(&mut self, d: usize, v: Scalar) {
        self.l[d] = v;
    }

    /// Move the upper face of dimension `d` to `v`. See [`HyperRectangle::set_lower`].
    pub(crate) fn set_upper(&mut self, d: usize, v: Scalar) {
        self.u[d] = v;
    }

    /// Pointwise intersection: `max(L, L')` / `min(U, U')`. Returns `Ok(None)` if the
    /// resulting box has a negative width on any axis (the rectangles don't overlap).
    pub fn intersect(&self, other: &HyperRectangle) -> Result<Option<HyperRectangle>> {
        check_same_dimension(self.k(), other.k())?;
        let l: Vec<Scalar> = self
            .l
            .iter()
            .zip(&other.l)
            .map(|(a, b)| a.max(*b))
            .collect();
        let u: Vec<Scalar> = self
            .u
            .iter()
            .zip(&other.u)
            .map(|(a, b)| a.min(*b))
            .collect();
        if l.iter().zip(&u).any(|(lo, hi)| hi - lo < 0.0) {
            Ok(None)
        } else {
            Ok(Some(HyperRectangle { l, u }))
        }
    }
}

impl PartialEq for HyperRectangle {
    fn eq(&self, other: &Self) -> bool {
        self.l == other.l && self.u == other.u
    }
}
impl Eq for HyperRectangle {}

impl Hash for HyperRectangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for v in self.l.iter().chain(self.u.iter()) {
            v.to_bits().hash(state);
        }
    }
}

impl std::fmt::Display for HyperRectangle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "L={:?} U={:?}", self.l, self.u)
    }
}
