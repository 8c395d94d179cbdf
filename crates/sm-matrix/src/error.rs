use thiserror::Error;

use crate::shape::Shape;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    #[error("matmul dimension mismatch: {lhs} @ {rhs}")]
    DimensionMismatch { lhs: Shape, rhs: Shape },
    #[error("ragged rows: row {row} has {got} columns, expected {expected}")]
    ShapeError {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("data length {got} does not match shape (expected {expected} elements)")]
    DataLength { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
