//! `sm-matrix` - Dense real-valued matrices with a recursive multiplication engine.
//!
//! This crate provides:
//! - A `Matrix` type with zero-default reads, clipped slicing and
//!   truncating concatenation
//! - A `MatMul` trait for pluggable multiplication strategies
//! - `NaiveMultiplier`, the triple-loop reference implementation
//! - `StrassenMultiplier`, which switches between naive and Strassen's
//!   divide-and-conquer based on operand size
//! - Shape utilities and the multiply configuration

pub mod backend;
pub mod config;
pub mod error;
pub mod matrix;
pub mod multiply;
pub mod shape;

// Re-export primary types at the crate root for convenience.
pub use backend::MatMul;
pub use config::{MultiplyConfig, DEFAULT_NAIVE_THRESHOLD};
pub use error::{MatrixError, Result};
pub use matrix::Matrix;
pub use multiply::{multiply, NaiveMultiplier, StrassenMultiplier};
pub use shape::Shape;
