use std::fmt;

/// The `(rows, columns)` extent of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    pub rows: usize,
    pub columns: usize,
}

impl Shape {
    /// Create a new shape.
    pub fn new(rows: usize, columns: usize) -> Self {
        Shape { rows, columns }
    }

    /// The shape shared by every empty matrix.
    pub fn empty() -> Self {
        Shape::new(0, 0)
    }

    /// Total number of cells.
    pub fn numel(&self) -> usize {
        self.rows * self.columns
    }

    /// Returns true if either side is zero.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.columns == 0
    }

    /// The longer of the two sides.
    pub fn max_side(&self) -> usize {
        self.rows.max(self.columns)
    }

    /// Shape with rows and columns swapped.
    pub fn transposed(&self) -> Shape {
        Shape::new(self.columns, self.rows)
    }

    /// Elementwise maximum of two shapes.
    ///
    /// This is the result shape of `add`/`subtract`, where the smaller
    /// operand is read as if padded with zeros.
    pub fn union(&self, other: &Shape) -> Shape {
        Shape::new(self.rows.max(other.rows), self.columns.max(other.columns))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.columns)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, columns): (usize, usize)) -> Self {
        Shape::new(rows, columns)
    }
}
