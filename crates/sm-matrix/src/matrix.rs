use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Range, Sub};

use crate::backend::MatMul;
use crate::error::{MatrixError, Result};
use crate::multiply::StrassenMultiplier;
use crate::shape::Shape;

/// A dense, row-major matrix of `f64` values.
///
/// Reads outside `[0, rows) x [0, columns)` return `0.0` and writes there are
/// ignored. The recursive multiplier relies on this: a matrix smaller than the
/// current quadrant size behaves as if it were padded with zero rows and
/// columns, without those zeros ever being stored.
///
/// A matrix with a zero side is empty. Empty matrices hold no storage and
/// compare equal to each other whatever their nominal shape.
#[derive(Debug, Clone, Default)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    columns: usize,
}

impl Matrix {
    /// The canonical empty matrix.
    pub fn empty() -> Self {
        Matrix {
            data: Vec::new(),
            rows: 0,
            columns: 0,
        }
    }

    /// Create a zero-filled matrix.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self::filled(rows, columns, 0.0)
    }

    /// Create a matrix with every cell set to `value`.
    pub fn filled(rows: usize, columns: usize, value: f64) -> Self {
        Matrix {
            data: vec![value; rows * columns],
            rows,
            columns,
        }
    }

    /// Create a matrix whose cell `(i, j)` is `f(i, j)`.
    ///
    /// `f` is called exactly once per cell, in row-major order.
    pub fn from_fn<F>(rows: usize, columns: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut data = Vec::with_capacity(rows * columns);
        for i in 0..rows {
            for j in 0..columns {
                data.push(f(i, j));
            }
        }
        Matrix {
            data,
            rows,
            columns,
        }
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// Create a matrix from row-major data.
    ///
    /// # Errors
    /// Returns `DataLength` if `data.len() != rows * columns`.
    pub fn from_vec(rows: usize, columns: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * columns {
            return Err(MatrixError::DataLength {
                expected: rows * columns,
                got: data.len(),
            });
        }
        Ok(Matrix {
            data,
            rows,
            columns,
        })
    }

    /// Create a matrix from a sequence of rows.
    ///
    /// Returns the empty matrix if there are no rows or the first row is empty.
    ///
    /// # Errors
    /// Returns `ShapeError` if the rows have differing lengths.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[f64]>,
    {
        let columns = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        for (row, values) in rows.iter().enumerate() {
            let got = values.as_ref().len();
            if got != columns {
                return Err(MatrixError::ShapeError {
                    row,
                    expected: columns,
                    got,
                });
            }
        }
        if rows.is_empty() || columns == 0 {
            return Ok(Self::empty());
        }
        let data = rows
            .iter()
            .flat_map(|r| r.as_ref().iter().copied())
            .collect();
        Ok(Matrix {
            data,
            rows: rows.len(),
            columns,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.columns)
    }

    /// Returns true if either side is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// Row-major view of the stored cells.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy the cells out as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows)
            .map(|i| self.data[i * self.columns..(i + 1) * self.columns].to_vec())
            .collect()
    }

    /// Value at `(i, j)`, or `0.0` when the position lies outside the matrix.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i >= self.rows || j >= self.columns {
            return 0.0;
        }
        self.data[i * self.columns + j]
    }

    /// Store `value` at `(i, j)`. Positions outside the matrix are ignored.
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        if i < self.rows && j < self.columns {
            self.data[i * self.columns + j] = value;
        }
    }

    /// Apply `f` to every cell.
    pub fn map<F>(&self, f: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            rows: self.rows,
            columns: self.columns,
        }
    }

    /// Elementwise sum over the union of both shapes.
    ///
    /// Cells missing from the smaller operand count as zero, so mismatched
    /// shapes never fail.
    pub fn add(&self, other: &Matrix) -> Matrix {
        self.zip_padded(other, |a, b| a + b)
    }

    /// Elementwise difference over the union of both shapes.
    pub fn subtract(&self, other: &Matrix) -> Matrix {
        self.zip_padded(other, |a, b| a - b)
    }

    fn zip_padded<F>(&self, other: &Matrix, f: F) -> Matrix
    where
        F: Fn(f64, f64) -> f64,
    {
        let shape = self.shape().union(&other.shape());
        Matrix::from_fn(shape.rows, shape.columns, |i, j| {
            f(self.get(i, j), other.get(i, j))
        })
    }

    /// Multiply every cell by `k`.
    pub fn scale(&self, k: f64) -> Matrix {
        self.map(|x| x * k)
    }

    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.columns, self.rows, |j, i| self.get(i, j))
    }

    /// Sub-matrix covering `rows x columns` clipped to this matrix's extent.
    ///
    /// Returns the empty matrix if either range is empty or starts at or past
    /// the end of the matrix.
    pub fn slice(&self, rows: Range<usize>, columns: Range<usize>) -> Matrix {
        if rows.start >= self.rows || columns.start >= self.columns {
            return Matrix::empty();
        }
        if rows.is_empty() || columns.is_empty() {
            return Matrix::empty();
        }
        let row_end = rows.end.min(self.rows);
        let column_end = columns.end.min(self.columns);
        Matrix::from_fn(row_end - rows.start, column_end - columns.start, |i, j| {
            self.get(rows.start + i, columns.start + j)
        })
    }

    /// Place `other` to the right of `self`.
    ///
    /// An empty operand yields the other one unchanged. Otherwise only the
    /// first `min(self.rows, other.rows)` rows are kept. Recombining quadrants
    /// of uneven height depends on this truncation, so it is not a general
    /// purpose join: shape bugs in callers are silently clipped.
    pub fn concat_horizontally(&self, other: &Matrix) -> Matrix {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let rows = self.rows.min(other.rows);
        Matrix::from_fn(rows, self.columns + other.columns, |i, j| {
            if j < self.columns {
                self.get(i, j)
            } else {
                other.get(i, j - self.columns)
            }
        })
    }

    /// Place `other` below `self`, keeping only `min(self.columns, other.columns)`
    /// columns. See [`Matrix::concat_horizontally`] for the truncation caveat.
    pub fn concat_vertically(&self, other: &Matrix) -> Matrix {
        if self.is_empty() {
            return other.clone();
        }
        if other.is_empty() {
            return self.clone();
        }
        let columns = self.columns.min(other.columns);
        Matrix::from_fn(self.rows + other.rows, columns, |i, j| {
            if i < self.rows {
                self.get(i, j)
            } else {
                other.get(i - self.rows, j)
            }
        })
    }

    /// Matrix product using the default Strassen dispatcher.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `self.columns() != other.rows()`.
    pub fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        StrassenMultiplier::default().multiply(self, other)
    }

    /// Matrix product using the given backend.
    pub fn matmul_with(&self, other: &Matrix, backend: &dyn MatMul) -> Result<Matrix> {
        backend.multiply(self, other)
    }

    /// Same shape and every pair of cells within `epsilon`.
    pub fn approx_eq(&self, other: &Matrix, epsilon: f64) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(other.data.iter())
                .all(|(a, b)| (a - b).abs() <= epsilon)
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() || other.is_empty() {
            return self.is_empty() && other.is_empty();
        }
        self.rows == other.rows && self.columns == other.columns && self.data == other.data
    }
}

impl Hash for Matrix {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            Shape::empty().hash(state);
            return;
        }
        self.rows.hash(state);
        self.columns.hash(state);
        for &value in &self.data {
            // -0.0 == 0.0, so both must hash alike.
            let value = if value == 0.0 { 0.0f64 } else { value };
            value.to_bits().hash(state);
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        for i in 0..self.rows {
            if i == 0 {
                write!(f, "[ ")?;
            } else {
                write!(f, "  ")?;
            }
            write!(f, "[ ")?;
            for j in 0..self.columns {
                write!(f, "{:<20}", format!("{:?}", self.get(i, j)))?;
                if j != self.columns - 1 {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if i != self.rows - 1 {
                writeln!(f, ",")?;
            } else {
                write!(f, " ]")?;
            }
        }
        Ok(())
    }
}

impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: &Matrix) -> Matrix {
        Matrix::add(self, rhs)
    }
}

impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: &Matrix) -> Matrix {
        self.subtract(rhs)
    }
}

impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, k: f64) -> Matrix {
        self.scale(k)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(m: &Matrix) -> u64 {
        let mut h = DefaultHasher::new();
        m.hash(&mut h);
        h.finish()
    }

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_from_fn_row_major_order() {
        let mut calls = Vec::new();
        let a = Matrix::from_fn(2, 3, |i, j| {
            calls.push((i, j));
            (i * 3 + j) as f64
        });
        assert_eq!(calls, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
        assert_eq!(a.as_slice(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(a.shape(), Shape::new(2, 3));
    }

    #[test]
    fn test_zero_side_is_empty() {
        let tall = Matrix::zeros(3, 0);
        assert!(tall.is_empty());
        assert_eq!(tall.shape(), Shape::new(3, 0));
        assert!(tall.as_slice().is_empty());
        assert_eq!(tall, Matrix::empty());
        assert_eq!(tall, Matrix::zeros(0, 4));
        assert!(Matrix::from_vec(0, 3, vec![]).unwrap().is_empty());
    }

    #[test]
    fn test_from_rows() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        assert_eq!(a.rows(), 2);
        assert_eq!(a.columns(), 3);
        assert_eq!(a.get(1, 2), 6.0);
        assert_eq!(a.to_rows(), vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        let err = Matrix::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            MatrixError::ShapeError {
                row: 1,
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let none: Vec<Vec<f64>> = vec![];
        assert!(Matrix::from_rows(&none).unwrap().is_empty());
        let blank: Vec<Vec<f64>> = vec![vec![], vec![]];
        assert!(Matrix::from_rows(&blank).unwrap().is_empty());
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        assert!(matches!(
            Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0]),
            Err(MatrixError::DataLength { expected: 4, got: 3 })
        ));
    }

    #[test]
    fn test_out_of_range_read_is_zero() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        assert_eq!(a.get(2, 0), 0.0);
        assert_eq!(a.get(0, 2), 0.0);
        assert_eq!(a.get(100, 100), 0.0);
        assert_eq!(Matrix::empty().get(0, 0), 0.0);
    }

    #[test]
    fn test_out_of_range_write_is_ignored() {
        let mut a = Matrix::zeros(2, 2);
        a.set(1, 1, 7.0);
        a.set(2, 0, 9.0);
        a.set(0, 5, 9.0);
        assert_eq!(a.as_slice(), &[0.0, 0.0, 0.0, 7.0]);
    }

    #[test]
    fn test_add_subtract_pad_with_zeros() {
        let a = m(&[&[1.0, 2.0, 3.0]]);
        let b = m(&[&[10.0], &[20.0]]);
        assert_eq!(a.add(&b), m(&[&[11.0, 2.0, 3.0], &[20.0, 0.0, 0.0]]));
        assert_eq!(a.subtract(&b), m(&[&[-9.0, 2.0, 3.0], &[-20.0, 0.0, 0.0]]));
        assert_eq!(a.add(&Matrix::empty()), a);
        assert_eq!(Matrix::empty().subtract(&b), b.scale(-1.0));
    }

    #[test]
    fn test_operators_delegate() {
        let a = m(&[&[1.0, 2.0]]);
        let b = m(&[&[3.0, 4.0]]);
        assert_eq!(&a + &b, a.add(&b));
        assert_eq!(&a - &b, a.subtract(&b));
        assert_eq!(&a * 2.0, m(&[&[2.0, 4.0]]));
    }

    #[test]
    fn test_transpose() {
        let a = m(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]]);
        let t = a.transpose();
        assert_eq!(t, m(&[&[1.0, 4.0], &[2.0, 5.0], &[3.0, 6.0]]));
        assert_eq!(t.transpose(), a);
        assert!(Matrix::empty().transpose().is_empty());
    }

    #[test]
    fn test_slice_clips_to_extent() {
        let a = Matrix::from_fn(3, 3, |i, j| (i * 3 + j) as f64);
        assert_eq!(a.slice(1..5, 2..8), m(&[&[5.0], &[8.0]]));
        assert_eq!(a.slice(0..2, 0..2), m(&[&[0.0, 1.0], &[3.0, 4.0]]));
    }

    #[test]
    fn test_slice_out_of_range_is_empty() {
        let a = Matrix::filled(2, 2, 1.0);
        assert!(a.slice(2..4, 0..2).is_empty());
        assert!(a.slice(0..2, 3..4).is_empty());
        assert!(a.slice(1..1, 0..2).is_empty());
    }

    #[test]
    fn test_concat_horizontally_truncates_rows() {
        let a = Matrix::filled(2, 2, 1.0);
        let b = Matrix::filled(3, 2, 2.0);
        let c = a.concat_horizontally(&b);
        assert_eq!(c.shape(), Shape::new(2, 4));
        assert_eq!(c.to_rows()[1], vec![1.0, 1.0, 2.0, 2.0]);
    }

    #[test]
    fn test_concat_vertically_truncates_columns() {
        let a = Matrix::filled(1, 3, 1.0);
        let b = Matrix::filled(2, 2, 2.0);
        let c = a.concat_vertically(&b);
        assert_eq!(c, m(&[&[1.0, 1.0], &[2.0, 2.0], &[2.0, 2.0]]));
    }

    #[test]
    fn test_concat_with_empty_returns_other() {
        let a = Matrix::filled(2, 3, 5.0);
        assert_eq!(a.concat_horizontally(&Matrix::empty()), a);
        assert_eq!(Matrix::empty().concat_vertically(&a), a);
    }

    #[test]
    fn test_equality_and_hash() {
        let a = m(&[&[0.0, 1.0]]);
        let b = m(&[&[-0.0, 1.0]]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, a.transpose());
        assert_eq!(hash_of(&Matrix::zeros(5, 0)), hash_of(&Matrix::empty()));
    }

    #[test]
    fn test_approx_eq() {
        let a = m(&[&[1.0, 2.0]]);
        let b = m(&[&[1.0 + 1e-12, 2.0]]);
        assert!(a.approx_eq(&b, 1e-9));
        assert!(!a.approx_eq(&b.transpose(), 1e-9));
    }

    #[test]
    fn test_approx_eq_treats_empties_alike() {
        let tall = Matrix::zeros(3, 0);
        assert_eq!(tall, Matrix::empty());
        assert!(tall.approx_eq(&Matrix::empty(), 1e-9));
        assert!(Matrix::empty().approx_eq(&Matrix::zeros(0, 4), 1e-9));
        assert!(!tall.approx_eq(&Matrix::zeros(1, 1), 1e-9));
    }

    #[test]
    fn test_display() {
        let a = m(&[&[1.0, 2.0], &[3.0, 4.0]]);
        let expected = format!(
            "[ [ {:<20}, {:<20}],\n  [ {:<20}, {:<20}] ]",
            "1.0", "2.0", "3.0", "4.0"
        );
        assert_eq!(a.to_string(), expected);
        assert_eq!(Matrix::empty().to_string(), "");
    }
}
