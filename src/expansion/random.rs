//! Random strategy: repeatedly burst-expand a randomly chosen (dimension,
//! direction) pair by a randomly chosen number of steps, until every pair has
//! locked.

use rand::Rng;
use rand_distr::StandardNormal;

use super::{push_lower, push_upper};
use crate::data::PointCloud;
use crate::index::Index;
use crate::rectangle::HyperRectangle;
use crate::seed::Seed;

#[derive(Clone, Copy)]
enum Direction {
    Up,
    Down,
}

pub(crate) fn expand(
    seed: Seed,
    index: &Index,
    data: &PointCloud,
    interior_only: bool,
    rng: &mut impl Rng,
) -> (HyperRectangle, bool) {
    let Seed {
        mut rectangle,
        mut upper_ndxs,
        mut lower_ndxs,
    } = seed;
    let k = rectangle.k();
    let mut interior = true;

    let mut pairs: Vec<(usize, Direction)> = (0..k)
        .flat_map(|d| [(d, Direction::Down), (d, Direction::Up)])
        .collect();

    while !pairs.is_empty() && (interior || !interior_only) {
        let r = rng.gen_range(0..pairs.len());
        let (d, direction) = pairs[r];
        // at least one step is always attempted, matching floor(|N(0,1)|) + 1
        let sample: f64 = rng.sample(StandardNormal);
        let steps = sample.abs().floor() as u32 + 1;

        let mut locked = false;
        for _ in 0..steps {
            locked = match direction {
                Direction::Up => push_upper(
                    &mut rectangle,
                    index,
                    data,
                    d,
                    &mut upper_ndxs[d],
                    &mut interior,
                ),
                Direction::Down => push_lower(
                    &mut rectangle,
                    index,
                    data,
                    d,
                    &mut lower_ndxs[d],
                    &mut interior,
                ),
            };
            if locked {
                break;
            }
        }

        if locked {
            pairs.remove(r);
        }

        if interior_only && !interior {
            return (rectangle, interior);
        }
    }

    (rectangle, interior)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::random_seed;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn grid_data() -> PointCloud {
        let mut rows = Vec::new();
        for x in 0..6 {
            for y in 0..6 {
                for z in 0..6 {
                    rows.push(vec![x as f64, y as f64, z as f64]);
                }
            }
        }
        PointCloud::from_rows(&rows).unwrap()
    }

    #[test]
    fn expanded_rectangle_stays_empty() {
        let data = grid_data();
        let index = Index::build(&data);
        let mut rng = ChaCha20Rng::seed_from_u64(5);

        for _ in 0..100 {
            let seed = random_seed(&index, &mut rng);
            let (rect, _interior) = expand(seed, &index, &data, false, &mut rng);
            assert!(rect.is_empty(&data));
        }
    }

    #[test]
    fn every_face_is_maximal() {
        let data = grid_data();
        let index = Index::build(&data);
        let mut rng = ChaCha20Rng::seed_from_u64(6);

        for _ in 0..50 {
            let seed = random_seed(&index, &mut rng);
            let (rect, _interior) = expand(seed, &index, &data, false, &mut rng);
            for d in 0..rect.k() {
                let at_upper_boundary = rect.upper()[d] == index.high(d);
                let upper_blocked = data.rows().any(|p| p[d] == rect.upper()[d] && rect.in_way(p, d));
                assert!(at_upper_boundary || upper_blocked);

                let at_lower_boundary = rect.lower()[d] == index.low(d);
                let lower_blocked = data.rows().any(|p| p[d] == rect.lower()[d] && rect.in_way(p, d));
                assert!(at_lower_boundary || lower_blocked);
            }
        }
    }
}
