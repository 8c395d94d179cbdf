pub mod chunk;
pub mod naive;
pub mod strassen;

use log::{debug, trace};

use crate::backend::MatMul;
use crate::config::MultiplyConfig;
use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

pub use chunk::Quadrants;
pub use naive::{dot_simple, NaiveMultiplier};

/// Multiply `a` by `b` with the default [`StrassenMultiplier`].
///
/// # Errors
/// Returns `DimensionMismatch` if `a.columns() != b.rows()`.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    StrassenMultiplier::default().multiply(a, b)
}

pub(crate) fn check_dimensions(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.columns() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    Ok(())
}

/// `ceil(log2(max_side))`, the exponent of the smallest power of two that
/// bounds every side of both operands. Zero for `max_side <= 1`.
pub fn chunk_rank(max_side: usize) -> u32 {
    max_side.max(1).next_power_of_two().trailing_zeros()
}

fn operand_rank(a: &Matrix, b: &Matrix) -> u32 {
    chunk_rank(a.shape().max_side().max(b.shape().max_side()))
}

/// Size-adaptive multiplier.
///
/// Small operands go straight to the naive kernel. Larger ones are split into
/// quadrants at half the bounding power of two and combined with Strassen's
/// seven products, or with plain block products when some quadrant is empty.
/// Every sub-product recurses back through the same dispatch.
#[derive(Debug, Clone, Default)]
pub struct StrassenMultiplier {
    config: MultiplyConfig,
}

impl StrassenMultiplier {
    pub fn new(config: MultiplyConfig) -> Self {
        StrassenMultiplier { config }
    }

    pub fn config(&self) -> &MultiplyConfig {
        &self.config
    }

    /// Recursive product without dimension checks.
    ///
    /// Inner sizes may disagree inside the recursion; the shorter operand is
    /// read as zero-padded. The result is always `a.rows() x b.columns()`.
    fn dot(&self, a: &Matrix, b: &Matrix) -> Matrix {
        if a.is_empty() || b.is_empty() {
            return Matrix::empty();
        }
        self.dot_at_rank(a, b, operand_rank(a, b))
    }

    /// One dispatch step for non-empty operands whose chunk rank is `rank`.
    fn dot_at_rank(&self, a: &Matrix, b: &Matrix, rank: u32) -> Matrix {
        if rank <= self.config.naive_threshold {
            return dot_simple(a, b);
        }

        let split_index = (1usize << rank) / 2;
        let chunked_a = Quadrants::split(a, split_index);
        let chunked_b = Quadrants::split(b, split_index);

        let product = |x: &Matrix, y: &Matrix| self.dot(x, y);
        let chunked_c = if chunked_a.is_degenerate() || chunked_b.is_degenerate() {
            trace!("chunked at split {}: {} @ {}", split_index, a.shape(), b.shape());
            strassen::chunked(&chunked_a, &chunked_b, product)
        } else {
            trace!("strassen at split {}: {} @ {}", split_index, a.shape(), b.shape());
            strassen::strassen(&chunked_a, &chunked_b, product)
        };

        chunked_c.recombine()
    }
}

impl MatMul for StrassenMultiplier {
    fn name(&self) -> &str {
        "strassen"
    }

    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        check_dimensions(a, b)?;
        if a.is_empty() || b.is_empty() {
            return Ok(Matrix::empty());
        }

        let rank = operand_rank(a, b);
        debug!(
            "multiply {} @ {}: chunk rank {}, {}",
            a.shape(),
            b.shape(),
            rank,
            if rank <= self.config.naive_threshold {
                "naive"
            } else {
                "recursive"
            }
        );
        Ok(self.dot_at_rank(a, b, rank))
    }
}
