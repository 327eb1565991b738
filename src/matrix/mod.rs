//! Dense heap-allocated real matrix with 1-based indexing.

mod block;
mod fmt;
mod norm;
mod ops;

use crate::error::MatrixError;

/// Dense `f64` matrix, stored column-major on the heap.
///
/// All public row/column parameters are **1-based** and validated against
/// both bounds; `(1, 1)` is the top-left entry. Checked access goes
/// through [`Matrix::get`] / [`Matrix::set`], while `Index` / `IndexMut`
/// with a `(row, col)` tuple panic on out-of-range indices.
///
/// # Example
///
/// ```
/// use realmat::Matrix;
///
/// let m = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(m[(2, 1)], 3.0);
/// assert_eq!(m.get(1, 2), Ok(2.0));
/// assert!(m.get(0, 1).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    /// Element storage, column-major.
    data: Vec<f64>,
    nrows: usize,
    ncols: usize,
}

impl Matrix {
    /// Create a matrix of zeros. Panics if either dimension is zero.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        assert!(
            nrows >= 1 && ncols >= 1,
            "matrix dimensions must be at least 1x1, got {}x{}",
            nrows,
            ncols
        );
        Matrix {
            data: vec![0.0; nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Square matrix of zeros.
    pub fn square(n: usize) -> Self {
        Self::zeros(n, n)
    }

    /// Rectangular identity: ones where the row and column index agree.
    pub fn eye(nrows: usize, ncols: usize) -> Self {
        let mut m = Self::zeros(nrows, ncols);
        for d in 1..=nrows.min(ncols) {
            m[(d, d)] = 1.0;
        }
        m
    }

    /// Square identity.
    pub fn identity(n: usize) -> Self {
        Self::eye(n, n)
    }

    /// Elementary column vector: `n x 1`, with a single one at row `k`.
    pub fn elementary(n: usize, k: usize) -> Result<Self, MatrixError> {
        let mut m = Self::zeros(n, 1);
        m.set(k, 1, 1.0)?;
        Ok(m)
    }

    /// Build from a row-major slice of `nrows * ncols` values.
    pub fn from_rows(nrows: usize, ncols: usize, values: &[f64]) -> Self {
        assert_eq!(
            values.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            values.len(),
            nrows,
            ncols
        );
        let mut m = Self::zeros(nrows, ncols);
        for r in 0..nrows {
            for c in 0..ncols {
                m.data[c * nrows + r] = values[r * ncols + c];
            }
        }
        m
    }

    /// Build element-wise from a function of the 1-based `(row, col)` pair.
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut m = Self::zeros(nrows, ncols);
        for c in 1..=ncols {
            for r in 1..=nrows {
                m.data[(c - 1) * nrows + (r - 1)] = f(r, c);
            }
        }
        m
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        (1..=self.nrows).contains(&row) && (1..=self.ncols).contains(&col)
    }

    /// Storage offset for a valid 1-based index pair.
    fn offset(&self, row: usize, col: usize) -> usize {
        (col - 1) * self.nrows + (row - 1)
    }

    fn out_of_range(&self, row: usize, col: usize) -> MatrixError {
        MatrixError::OutOfRange {
            row,
            col,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Checked element read, 1-based.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatrixError> {
        if !self.in_bounds(row, col) {
            return Err(self.out_of_range(row, col));
        }
        Ok(self.data[self.offset(row, col)])
    }

    /// Checked element write, 1-based.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), MatrixError> {
        if !self.in_bounds(row, col) {
            return Err(self.out_of_range(row, col));
        }
        let i = self.offset(row, col);
        self.data[i] = value;
        Ok(())
    }

    /// Swap rows `r1` and `r2` across columns `c0..=c1`.
    /// Caller guarantees all four indices are in range.
    pub(crate) fn swap_rows(&mut self, r1: usize, r2: usize, c0: usize, c1: usize) {
        if r1 == r2 {
            return;
        }
        for c in c0..=c1 {
            let i = self.offset(r1, c);
            let j = self.offset(r2, c);
            self.data.swap(i, j);
        }
    }

    /// Unchecked sub-matrix copy over inclusive 1-based bounds.
    /// Caller guarantees `r0 <= r1 <= nrows` and `c0 <= c1 <= ncols`.
    pub(crate) fn block(&self, r0: usize, r1: usize, c0: usize, c1: usize) -> Matrix {
        debug_assert!(r0 >= 1 && r0 <= r1 && r1 <= self.nrows);
        debug_assert!(c0 >= 1 && c0 <= c1 && c1 <= self.ncols);
        Matrix::from_fn(r1 - r0 + 1, c1 - c0 + 1, |r, c| {
            self[(r0 + r - 1, c0 + c - 1)]
        })
    }

    /// Unchecked block paste at 1-based `(row, col)`.
    /// Caller guarantees the block fits.
    pub(crate) fn paste(&self, row: usize, col: usize, b: &Matrix) -> Matrix {
        debug_assert!(row + b.nrows - 1 <= self.nrows && col + b.ncols - 1 <= self.ncols);
        Matrix::from_fn(self.nrows, self.ncols, |r, c| {
            if r >= row && r < row + b.nrows && c >= col && c < col + b.ncols {
                b[(r - row + 1, c - col + 1)]
            } else {
                self[(r, c)]
            }
        })
    }
}

/// Build from a nested row-major array literal.
///
/// ```
/// use realmat::Matrix;
/// let m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
/// assert_eq!((m.nrows(), m.ncols()), (2, 3));
/// assert_eq!(m[(1, 3)], 3.0);
/// ```
impl<const M: usize, const N: usize> From<[[f64; N]; M]> for Matrix {
    fn from(rows: [[f64; N]; M]) -> Self {
        let mut m = Matrix::zeros(M, N);
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                m.data[c * M + r] = v;
            }
        }
        m
    }
}

impl core::ops::Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// 1-based element access. Panics on out-of-range indices.
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            self.in_bounds(row, col),
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        &self.data[self.offset(row, col)]
    }
}

impl core::ops::IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            self.in_bounds(row, col),
            "index ({}, {}) out of range for {}x{} matrix",
            row,
            col,
            self.nrows,
            self.ncols
        );
        let i = self.offset(row, col);
        &mut self.data[i]
    }
}
