//! Sequential strategy: expand one dimension at a time, fully, in a random order.
//! Early dimensions grow unobstructed; later ones get squeezed, producing long,
//! narrow rectangles.

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
    let mut interior = true;

    let mut order: Vec<usize> = (0..rectangle.k()).collect();
    order.shuffle(rng);

    for d in order {
        loop {
            if push_upper(&mut rectangle, index, data, d, &mut upper_ndxs[d], &mut interior) {
                break;
            }
        }
        if interior_only && !interior {
            return (rectangle, interior);
        }

        loop {
            if push_lower(&mut rectangle, index, data, d, &mut lower_ndxs[d], &mut interior) {
                break;
            }
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
        for x in 0..5 {
            for y in 0..5 {
                rows.push(vec![x as f64, y as f64]);
            }
        }
        PointCloud::from_rows(&rows).unwrap()
    }

    #[test]
    fn expanded_rectangle_stays_empty_and_every_face_locked() {
        let data = grid_data();
        let index = Index::build(&data);
        let mut rng = ChaCha20Rng::seed_from_u64(1);

        for _ in 0..100 {
            let seed = random_seed(&index, &mut rng);
            let (rect, _interior) = expand(seed, &index, &data, false, &mut rng);
            assert!(rect.is_empty(&data));
        }
    }

    #[test]
    fn interior_flag_implies_strictly_inside_bounding_box() {
        let data = grid_data();
        let index = Index::build(&data);
        let mut rng = ChaCha20Rng::seed_from_u64(2);

        for _ in 0..200 {
            let seed = random_seed(&index, &mut rng);
            let (rect, interior) = expand(seed, &index, &data, false, &mut rng);
            if interior {
                for d in 0..rect.k() {
                    assert!(rect.lower()[d] > index.low(d));
                    assert!(rect.upper()[d] < index.high(d));
                }
            }
        }
    }
}
