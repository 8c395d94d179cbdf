use std::io::Write;
use std::time::{Duration, Instant};

use log::debug;
use sm_matrix::{MatMul, Matrix, Shape};

use crate::catalog::SampleCase;
use crate::error::Result;

/// Matrices with a longer side are reported by shape only.
pub const MAX_SIDE_SIZE_TO_PRINT: usize = 50;

/// Outcome of running one [`SampleCase`].
#[derive(Debug, Clone)]
pub struct SampleReport {
    pub name: String,
    pub shape: Shape,
    pub elapsed: Duration,
    /// `None` when the case carries no expected product.
    pub matches_expected: Option<bool>,
}

/// Multiply the case's operands with `backend` and write a report to `out`.
///
/// Each matrix is printed under its name when both sides are at most
/// [`MAX_SIDE_SIZE_TO_PRINT`], followed by its shape. Elapsed time is
/// reported when it exceeds one millisecond.
pub fn run_case<W: Write>(
    case: &SampleCase,
    backend: &dyn MatMul,
    out: &mut W,
) -> Result<SampleReport> {
    debug!(
        "running sample {} with {}: {} @ {}",
        case.name,
        backend.name(),
        case.lhs.shape(),
        case.rhs.shape()
    );

    let start = Instant::now();
    let result = backend.multiply(&case.lhs, &case.rhs)?;
    let elapsed = start.elapsed();

    pretty_print(out, "A", &case.lhs)?;
    pretty_print(out, "B", &case.rhs)?;
    pretty_print(out, "A*B", &result)?;

    let matches_expected = match &case.expected {
        Some(expected) => {
            pretty_print(out, "A*B expected", expected)?;
            Some(result.approx_eq(expected, 1e-9))
        }
        None => None,
    };

    if elapsed > Duration::from_millis(1) {
        writeln!(out, "Spent time: {} seconds", elapsed.as_secs_f64())?;
        writeln!(out)?;
    }

    Ok(SampleReport {
        name: case.name.clone(),
        shape: result.shape(),
        elapsed,
        matches_expected,
    })
}

fn pretty_print<W: Write>(out: &mut W, name: &str, matrix: &Matrix) -> Result<()> {
    writeln!(out, "{}:", name)?;
    let printable = matrix.shape().max_side() <= MAX_SIDE_SIZE_TO_PRINT;
    if printable && !matrix.is_empty() {
        writeln!(out, "{}", matrix)?;
    }
    writeln!(out, "shape of {}: {}", name, matrix.shape())?;
    writeln!(out)?;
    Ok(())
}
