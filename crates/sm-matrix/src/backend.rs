use std::fmt::Debug;

use crate::error::Result;
use crate::matrix::Matrix;

/// Trait for pluggable matrix multiplication strategies.
///
/// Implementations validate that `a.columns() == b.rows()` and return the
/// empty matrix when either operand is empty.
pub trait MatMul: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "naive", "strassen").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// - `a`: matrix of shape [m, k]
    /// - `b`: matrix of shape [k, n]
    /// - Returns: matrix of shape [m, n]
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;
}
