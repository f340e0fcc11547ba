//! The three randomized expansion procedures that grow a seed into a maximal
//! empty hyper-rectangle, plus the face-push primitive they all share.

mod even;
mod random;
mod sequential;

use rand::Rng;

use crate::data::PointCloud;
use crate::index::Index;
use crate::rectangle::HyperRectangle;
use crate::seed::Seed;
use crate::types::{ProjectionIndex, Strategy};

/// Dispatch to the expansion procedure named by `strategy`. Returns the maximal
/// rectangle and whether every face locked against a data point rather than the
/// data's bounding box (`interior`).
pub fn expand(
    strategy: Strategy,
    seed: Seed,
    index: &Index,
    data: &PointCloud,
    interior_only: bool,
    rng: &mut impl Rng,
) -> (HyperRectangle, bool) {
    match strategy {
        Strategy::Sequential => sequential::expand(seed, index, data, interior_only, rng),
        Strategy::Even => even::expand(seed, index, data, interior_only, rng),
        Strategy::Random => random::expand(seed, index, data, interior_only, rng),
    }
}

/// Attempt to push the upper face of `rect` in dimension `d` one notch outward.
/// `ndx` is the current position of that face in the dimension's projection table
/// and is advanced in place on success. Returns `true` if the face locked (either
/// against a blocking point or the data boundary); `interior` is cleared if the
/// lock was against the boundary.
///
/// The rectangle's bound is kept in sync with `ndx` after every successful push
/// (not only once the face finally locks): `in_way` checks performed for *other*
/// dimensions while this one is still open rely on seeing the up-to-date bound.
fn push_upper(
    rect: &mut HyperRectangle,
    index: &Index,
    data: &PointCloud,
    d: usize,
    ndx: &mut ProjectionIndex,
    interior: &mut bool,
) -> bool {
    let t = *ndx;
    let blocked = index
        .bucket(d, t)
        .iter()
        .any(|&p| rect.in_way(data.row(p), d));
    let at_boundary = t == index.len(d) - 1;

    if blocked || at_boundary {
        if at_boundary {
            *interior = false;
        }
        true
    } else {
        *ndx = t + 1;
        rect.set_upper(d, index.projection(d)[*ndx]);
        false
    }
}

/// Symmetric to [`push_upper`] for the lower face.
fn push_lower(
    rect: &mut HyperRectangle,
    index: &Index,
    data: &PointCloud,
    d: usize,
    ndx: &mut ProjectionIndex,
    interior: &mut bool,
) -> bool {
    let t = *ndx;
    let blocked = index
        .bucket(d, t)
        .iter()
        .any(|&p| rect.in_way(data.row(p), d));
    let at_boundary = t == 0;

    if blocked || at_boundary {
        if at_boundary {
            *interior = false;
        }
        true
    } else {
        *ndx = t - 1;
        rect.set_lower(d, index.projection(d)[*ndx]);
        false
    }
}
