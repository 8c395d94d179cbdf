//! `sm-samples` - Demonstration cases built on `sm-matrix`.
//!
//! Everything here talks to the core only through the matrix constructors
//! and `MatMul::multiply`.

pub mod catalog;
pub mod error;
pub mod random;
pub mod report;
pub mod timing;

pub use catalog::{SampleCase, SampleKind};
pub use error::{Result, SampleError};
pub use random::{random_matrix, seeded_rng};
pub use report::{run_case, SampleReport, MAX_SIDE_SIZE_TO_PRINT};
pub use timing::{timing_grid, write_table, BackendTiming, TimingRow};
