use std::ops::Range;

use crate::matrix::Matrix;

/// A matrix split into a 2x2 grid of quadrants at `split_index`.
///
/// Quadrant `[r][c]` covers rows `r * s .. (r + 1) * s` and columns
/// `c * s .. (c + 1) * s`, clipped to the source matrix. A quadrant that lies
/// entirely outside the source is the empty matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadrants {
    blocks: [[Matrix; 2]; 2],
    split_index: usize,
}

fn band(index: usize, split_index: usize) -> Range<usize> {
    index * split_index..(index + 1) * split_index
}

impl Quadrants {
    /// Split `matrix` at `split_index` along both axes.
    pub fn split(matrix: &Matrix, split_index: usize) -> Self {
        let block = |r: usize, c: usize| {
            matrix.slice(band(r, split_index), band(c, split_index))
        };
        Quadrants {
            blocks: [[block(0, 0), block(0, 1)], [block(1, 0), block(1, 1)]],
            split_index,
        }
    }

    /// Assemble a grid from four already computed blocks.
    pub fn from_blocks(blocks: [[Matrix; 2]; 2], split_index: usize) -> Self {
        Quadrants {
            blocks,
            split_index,
        }
    }

    pub fn split_index(&self) -> usize {
        self.split_index
    }

    /// Quadrant at grid position `(r, c)`, both in `0..2`.
    pub fn block(&self, r: usize, c: usize) -> &Matrix {
        &self.blocks[r][c]
    }

    /// True if any quadrant is empty, i.e. the source did not reach every
    /// region at this split size.
    pub fn is_degenerate(&self) -> bool {
        self.blocks.iter().flatten().any(Matrix::is_empty)
    }

    /// Join the quadrants back into one matrix.
    ///
    /// The top and bottom halves are joined horizontally, then stacked. Both
    /// joins truncate to the smaller neighbour, which trims padded results of
    /// the power-of-two recursion back to the true, possibly uneven, shape.
    pub fn recombine(&self) -> Matrix {
        let [[c00, c01], [c10, c11]] = &self.blocks;
        let top = c00.concat_horizontally(c01);
        let bottom = c10.concat_horizontally(c11);
        top.concat_vertically(&bottom)
    }
}
