use std::fmt;
use std::str::FromStr;

use rand::Rng;
use sm_matrix::Matrix;

use crate::error::{Result, SampleError};
use crate::random::random_matrix;

/// A pair of operands to multiply, with the product when it is known.
#[derive(Debug, Clone)]
pub struct SampleCase {
    pub name: String,
    pub lhs: Matrix,
    pub rhs: Matrix,
    pub expected: Option<Matrix>,
}

impl SampleCase {
    pub fn new(name: impl Into<String>, lhs: Matrix, rhs: Matrix) -> Self {
        SampleCase {
            name: name.into(),
            lhs,
            rhs,
            expected: None,
        }
    }

    pub fn with_expected(mut self, expected: Matrix) -> Self {
        self.expected = Some(expected);
        self
    }
}

/// The built-in demonstration cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    Singleton,
    SquaredSmall,
    SquaredLarge,
    Rectangle,
    ThinToSingleton,
    ThinToSquared,
    CreatedByHand,
    RandomSmall,
    RandomLarge,
}

impl SampleKind {
    pub const ALL: [SampleKind; 9] = [
        SampleKind::Singleton,
        SampleKind::SquaredSmall,
        SampleKind::SquaredLarge,
        SampleKind::Rectangle,
        SampleKind::ThinToSingleton,
        SampleKind::ThinToSquared,
        SampleKind::CreatedByHand,
        SampleKind::RandomSmall,
        SampleKind::RandomLarge,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SampleKind::Singleton => "singleton",
            SampleKind::SquaredSmall => "squared-small",
            SampleKind::SquaredLarge => "squared-large",
            SampleKind::Rectangle => "rectangle",
            SampleKind::ThinToSingleton => "thin-to-singleton",
            SampleKind::ThinToSquared => "thin-to-squared",
            SampleKind::CreatedByHand => "created-by-hand",
            SampleKind::RandomSmall => "random-small",
            SampleKind::RandomLarge => "random-large",
        }
    }

    /// Build the operands. Only the random cases draw from `rng`.
    ///
    /// # Errors
    /// Returns `SampleError::Matrix` if a literal operand is not rectangular.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Result<SampleCase> {
        let name = self.name();
        let case = match self {
            SampleKind::Singleton => {
                SampleCase::new(name, Matrix::filled(1, 1, 3.0), Matrix::filled(1, 1, 4.0))
            }
            SampleKind::SquaredSmall => {
                SampleCase::new(name, Matrix::filled(4, 4, 3.0), Matrix::filled(4, 4, 4.0))
            }
            SampleKind::SquaredLarge => SampleCase::new(
                name,
                Matrix::filled(512, 512, 3.0),
                Matrix::filled(512, 512, 4.0),
            ),
            SampleKind::Rectangle => {
                SampleCase::new(name, Matrix::filled(3, 4, 3.0), Matrix::filled(4, 5, 4.0))
            }
            SampleKind::ThinToSingleton => SampleCase::new(
                name,
                Matrix::filled(1, 512, 3.0),
                Matrix::filled(512, 1, 4.0),
            ),
            SampleKind::ThinToSquared => SampleCase::new(
                name,
                Matrix::filled(512, 1, 3.0),
                Matrix::filled(1, 512, 4.0),
            ),
            SampleKind::CreatedByHand => created_by_hand()?,
            SampleKind::RandomSmall => random_case(name, 5..50, rng),
            SampleKind::RandomLarge => random_case(name, 500..1500, rng),
        };
        Ok(case)
    }
}

fn integers(rows: &[&[i32]]) -> Result<Matrix> {
    let rows: Vec<Vec<f64>> = rows
        .iter()
        .map(|row| row.iter().map(|&x| f64::from(x)).collect())
        .collect();
    Ok(Matrix::from_rows(&rows)?)
}

fn created_by_hand() -> Result<SampleCase> {
    let lhs = integers(&[
        &[-1, 2, 3, 4, -5],
        &[2, 3, -4, 7, 8],
        &[5, 0, 9, -2, 7],
    ])?;
    let rhs = integers(&[
        &[1, 2, -3, 1],
        &[2, 3, 4, 0],
        &[5, -8, 3, 9],
        &[-1, -2, -3, 6],
        &[9, 7, -4, -7],
    ])?;
    let expected = integers(&[
        &[-31, -63, 28, 85],
        &[53, 87, -59, -48],
        &[115, -9, -10, 25],
    ])?;
    Ok(SampleCase::new(SampleKind::CreatedByHand.name(), lhs, rhs).with_expected(expected))
}

fn random_case<R: Rng>(name: &str, sides: std::ops::Range<usize>, rng: &mut R) -> SampleCase {
    let a = rng.gen_range(sides.clone());
    let b = rng.gen_range(sides.clone());
    let c = rng.gen_range(sides);
    SampleCase::new(name, random_matrix(a, b, rng), random_matrix(b, c, rng))
}

impl fmt::Display for SampleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SampleKind {
    type Err = SampleError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        SampleKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| SampleError::UnknownSample(s.to_string()))
    }
}
