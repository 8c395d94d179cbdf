use crate::backend::MatMul;
use crate::error::Result;
use crate::matrix::Matrix;

use super::check_dimensions;

/// Triple-loop multiplication without dimension checks.
///
/// The inner sum runs over `min(a.columns(), b.rows())`, so an operand that is
/// narrower than its partner behaves as if zero-padded. Cells are accumulated
/// in a fixed order (`i`, then `k`, then ascending `j`) so results are
/// reproducible bit for bit.
pub fn dot_simple(a: &Matrix, b: &Matrix) -> Matrix {
    let inner = a.columns().min(b.rows());
    let (lhs, rhs) = (a.as_slice(), b.as_slice());
    let (a_cols, b_cols) = (a.columns(), b.columns());

    let mut c = Matrix::zeros(a.rows(), b_cols);
    for i in 0..a.rows() {
        for k in 0..b_cols {
            let mut sum = 0.0f64;
            for j in 0..inner {
                sum += lhs[i * a_cols + j] * rhs[j * b_cols + k];
            }
            c.set(i, k, sum);
        }
    }
    c
}

/// Reference multiplier that always uses [`dot_simple`].
#[derive(Debug, Clone, Default)]
pub struct NaiveMultiplier;

impl NaiveMultiplier {
    pub fn new() -> Self {
        NaiveMultiplier
    }
}

impl MatMul for NaiveMultiplier {
    fn name(&self) -> &str {
        "naive"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        check_dimensions(a, b)?;
        if a.is_empty() || b.is_empty() {
            return Ok(Matrix::empty());
        }
        Ok(dot_simple(a, b))
    }
}
