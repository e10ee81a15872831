//! Random sampling helpers.
//!
//! Every function takes the generator explicitly. Render workers own one
//! generator per scan line (see [`row_rng`]), so no generator is ever
//! shared between threads.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayt_math::Vec3;

/// Uniform sample in [0, 1).
#[inline]
pub fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen::<f32>()
}

/// Uniform point strictly inside the unit sphere (rejection sampling).
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
            gen_f32(rng) * 2.0 - 1.0,
        );
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}

/// Odd 64-bit constant (golden ratio) used to spread row indices.
const ROW_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic generator for scan line `row` of a render seeded with `seed`.
///
/// The stream depends only on `(seed, row)`, never on which worker thread
/// picks the row up. Rows are multiplied by an odd constant before mixing
/// so neighbouring seeds do not share streams shifted by one row.
pub fn row_rng(seed: u64, row: u32) -> StdRng {
    StdRng::seed_from_u64(seed ^ (row as u64).wrapping_mul(ROW_MIX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_f32_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let x = gen_f32(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_random_in_unit_sphere() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            assert!(random_in_unit_sphere(&mut rng).length_squared() < 1.0);
        }
    }

    #[test]
    fn test_row_rng_is_reproducible() {
        let a: Vec<u32> = (0..8).map(|_| row_rng(42, 3).next_u32()).collect();
        assert!(a.windows(2).all(|w| w[0] == w[1]));

        let mut same = row_rng(42, 3);
        let mut other_row = row_rng(42, 4);
        let first: Vec<u32> = (0..4).map(|_| same.next_u32()).collect();
        let second: Vec<u32> = (0..4).map(|_| other_row.next_u32()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_adjacent_seeds_do_not_share_rows() {
        let stream = |seed: u64, row: u32| -> Vec<u32> {
            let mut rng = row_rng(seed, row);
            (0..4).map(|_| rng.next_u32()).collect()
        };

        for row in 0..16 {
            assert_ne!(stream(7, row + 1), stream(8, row), "row {}", row);
            assert_ne!(stream(8, row + 1), stream(7, row), "row {}", row);
        }
    }
}
