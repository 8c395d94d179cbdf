use crate::matrix::Matrix;

use super::chunk::Quadrants;

/// Strassen's seven-product combination of two quadrant grids.
///
/// Only valid when neither grid is degenerate: the identity needs every
/// quadrant to carry data, otherwise differences against empty blocks take
/// the wrong shape.
pub fn strassen<F>(a: &Quadrants, b: &Quadrants, dot: F) -> Quadrants
where
    F: Fn(&Matrix, &Matrix) -> Matrix,
{
    let (a00, a01, a10, a11) = (a.block(0, 0), a.block(0, 1), a.block(1, 0), a.block(1, 1));
    let (b00, b01, b10, b11) = (b.block(0, 0), b.block(0, 1), b.block(1, 0), b.block(1, 1));

    let p1 = dot(&a00.add(a11), &b00.add(b11));
    let p2 = dot(&a10.add(a11), b00);
    let p3 = dot(a00, &b01.subtract(b11));
    let p4 = dot(a11, &b10.subtract(b00));
    let p5 = dot(&a00.add(a01), b11);
    let p6 = dot(&a10.subtract(a00), &b00.add(b01));
    let p7 = dot(&a01.subtract(a11), &b10.add(b11));

    let c00 = p1.add(&p4).subtract(&p5).add(&p7);
    let c01 = p3.add(&p5);
    let c10 = p2.add(&p4);
    let c11 = p1.subtract(&p2).add(&p3).add(&p6);

    Quadrants::from_blocks([[c00, c01], [c10, c11]], a.split_index())
}

/// Plain block multiplication with eight products.
///
/// Used when a grid has empty quadrants; products against an empty block
/// collapse to the empty matrix and drop out of the sums.
pub fn chunked<F>(a: &Quadrants, b: &Quadrants, dot: F) -> Quadrants
where
    F: Fn(&Matrix, &Matrix) -> Matrix,
{
    let block = |r: usize, c: usize| {
        dot(a.block(r, 0), b.block(0, c)).add(&dot(a.block(r, 1), b.block(1, c)))
    };
    Quadrants::from_blocks(
        [[block(0, 0), block(0, 1)], [block(1, 0), block(1, 1)]],
        a.split_index(),
    )
}
