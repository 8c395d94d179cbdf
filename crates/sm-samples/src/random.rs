use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sm_matrix::Matrix;

/// Range random cell values are drawn from.
pub const VALUE_RANGE: Range<f64> = -20.0..20.0;

/// A reproducible RNG for the given seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A `rows x columns` matrix with values uniform in [`VALUE_RANGE`].
pub fn random_matrix<R: Rng>(rows: usize, columns: usize, rng: &mut R) -> Matrix {
    Matrix::from_fn(rows, columns, |_, _| rng.gen_range(VALUE_RANGE))
}
