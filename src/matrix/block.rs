//! Row, column, and sub-matrix extraction and insertion.

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl Matrix {
    /// Extract row `r` as a `1 x ncols` matrix.
    pub fn row(&self, r: usize) -> Result<Matrix, MatrixError> {
        if r < 1 || r > self.nrows {
            return Err(self.out_of_range(r, 1));
        }
        Ok(self.block(r, r, 1, self.ncols))
    }

    /// Extract column `c` as an `nrows x 1` matrix.
    pub fn column(&self, c: usize) -> Result<Matrix, MatrixError> {
        if c < 1 || c > self.ncols {
            return Err(self.out_of_range(1, c));
        }
        Ok(self.block(1, self.nrows, c, c))
    }

    /// Copy the inclusive sub-matrix spanning rows `r0..=r1` and
    /// columns `c0..=c1` (1-based).
    ///
    /// ```
    /// use realmat::Matrix;
    /// let m = Matrix::from([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    /// let s = m.submatrix(2, 3, 1, 2).unwrap();
    /// assert_eq!(s, Matrix::from([[4.0, 5.0], [7.0, 8.0]]));
    /// ```
    pub fn submatrix(
        &self,
        r0: usize,
        r1: usize,
        c0: usize,
        c1: usize,
    ) -> Result<Matrix, MatrixError> {
        if r0 < 1 || r1 > self.nrows || r0 > r1 {
            return Err(self.out_of_range(if r0 < 1 { r0 } else { r1 }, c0));
        }
        if c0 < 1 || c1 > self.ncols || c0 > c1 {
            return Err(self.out_of_range(r0, if c0 < 1 { c0 } else { c1 }));
        }
        Ok(self.block(r0, r1, c0, c1))
    }

    /// Return a copy with `block` written at 1-based `(row, col)`.
    /// Fails with a dimension mismatch when the block does not fit.
    pub fn insert(&self, row: usize, col: usize, block: &Matrix) -> Result<Matrix, MatrixError> {
        if row < 1 || col < 1 {
            return Err(self.out_of_range(row, col));
        }
        if row + block.nrows - 1 > self.nrows || col + block.ncols - 1 > self.ncols {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.nrows, self.ncols),
                got: (row + block.nrows - 1, col + block.ncols - 1),
            });
        }
        Ok(self.paste(row, col, block))
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.ncols, self.nrows, |r, c| self[(c, r)])
    }
}
