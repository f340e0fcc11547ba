//! Even strategy: cycle through a fixed random dimension order, nudging one face
//! at a time by a fair coin flip, so no axis is permitted to sprint ahead of the
//! others. Produces rectangles with comparable widths across dimensions.

use rand::seq::SliceRandom;
use rand::Rng;

use super::{push_lower, push_upper};
use crate::data::PointCloud;
use crate::index::Index;
use crate::rectangle::HyperRectangle;
use crate::seed::Seed;

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

    let mut order: Vec<usize> = (0..k).collect();
    order.shuffle(rng);

    let mut upper_locked = vec![false; k];
    let mut lower_locked = vec![false; k];

    while !(upper_locked.iter().all(|&b| b) && lower_locked.iter().all(|&b| b))
        && (interior || !interior_only)
    {
        for &d in &order {
            if rng.gen_bool(0.5) {
                if !upper_locked[d]
                    && push_upper(&mut rectangle, index, data, d, &mut upper_ndxs[d], &mut interior)
                {
                    upper_locked[d] = true;
                }
            } else if !lower_locked[d]
                && push_lower(&mut rectangle, index, data, d, &mut lower_ndxs[d], &mut interior)
            {
                lower_locked[d] = true;
            }

            if interior_only && !interior {
                return (rectangle, interior);
            }
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
        let mut rng = ChaCha20Rng::seed_from_u64(3);

        for _ in 0..100 {
            let seed = random_seed(&index, &mut rng);
            let (rect, _interior) = expand(seed, &index, &data, false, &mut rng);
            assert!(rect.is_empty(&data));
        }
    }

    #[test]
    fn interior_only_short_circuits_once_exterior() {
        let data = grid_data();
        let index = Index::build(&data);
        let mut rng = ChaCha20Rng::seed_from_u64(4);

        for _ in 0..100 {
            let seed = random_seed(&index, &mut rng);
            let (rect, interior) = expand(seed, &index, &data, true, &mut rng);
            assert!(rect.is_empty(&data));
            if !interior {
                // at least one face must coincide with the data boundary
                let hits_boundary = (0..rect.k()).any(|d| {
                    rect.lower()[d] == index.low(d) || rect.upper()[d] == index.high(d)
                });
                assert!(hits_boundary);
            }
        }
    }
}
