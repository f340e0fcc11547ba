//! Produces a guaranteed-empty micro-rectangle around a uniformly random point in
//! the data's bounding box, the starting point every expansion strategy grows from.

use rand::Rng;

use crate::index::Index;
use crate::rectangle::HyperRectangle;
use crate::types::{ProjectionIndex, Scalar};

/// A seed rectangle together with the projection-table positions its faces sit at,
/// so an expansion strategy can resume pushing from exactly where the seed left off.
pub struct Seed {
    pub rectangle: HyperRectangle,
    pub upper_ndxs: Vec<ProjectionIndex>,
    pub lower_ndxs: Vec<ProjectionIndex>,
}

/// Sample a random point in the data's bounding box and snap each dimension to the
/// two projection entries straddling it. Because those two entries are adjacent
/// distinct observed values, the resulting rectangle's interior is guaranteed empty.
pub fn random_seed(index: &Index, rng: &mut impl Rng) -> Seed {
    let k = index.k();
    let mut l = Vec::with_capacity(k);
    let mut u = Vec::with_capacity(k);
    let mut upper_ndxs = Vec::with_capacity(k);
    let mut lower_ndxs = Vec::with_capacity(k);

    for d in 0..k {
        if index.len(d) == 1 {
            // a single distinct value on this axis: the only honest seed is a
            // zero-width degenerate dimension pinned to that value.
            u.push(index.projection(d)[0]);
            l.push(index.projection(d)[0]);
            upper_ndxs.push(0);
            lower_ndxs.push(0);
            continue;
        }

        let r: Scalar = rng.gen_range(index.low(d)..=index.high(d));
        let t = index.search_sorted(d, r).max(1).min(index.len(d) - 1);
        u.push(index.projection(d)[t]);
        l.push(index.projection(d)[t - 1]);
        upper_ndxs.push(t);
        lower_ndxs.push(t - 1);
    }

    Seed {
        rectangle: HyperRectangle::new(l, u),
        upper_ndxs,
        lower_ndxs,
    }
}
