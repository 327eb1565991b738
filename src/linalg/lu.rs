//! LU factorization with partial pivoting, and the solvers built on it.

use crate::error::MatrixError;
use crate::linalg::triangular::{invert_lower, invert_upper};
use crate::matrix::Matrix;
use crate::precision::Precision;

/// Result of [`factor`]: `P * A = L * U`.
///
/// For an `h x w` input, `l` is `h x min(h, w)` unit-lower-triangular,
/// `u` is `min(h, w) x w` upper-triangular, and `p` is the `h x h` row
/// permutation. `swaps` counts the row exchanges performed.
#[derive(Debug, Clone)]
pub struct Lu {
    pub l: Matrix,
    pub u: Matrix,
    pub p: Matrix,
    pub swaps: u32,
}

/// LU factorization with partial pivoting.
///
/// Accepts rectangular and rank-deficient input. At each step the
/// largest-magnitude entry at or below the current row is chosen as
/// pivot; a column whose candidates are all below `precision.eps()` is
/// skipped without advancing the row, leaving a free column in `u`.
///
/// # Example
///
/// ```
/// use realmat::{linalg, Matrix, Precision};
///
/// let a = Matrix::from([[4.0, 3.0], [6.0, 3.0]]);
/// let f = linalg::lu::factor(&a, Precision::FULL);
/// assert_eq!(&f.p * &a, &f.l * &f.u);
/// ```
pub fn factor(a: &Matrix, precision: Precision) -> Lu {
    let (h, w) = (a.nrows(), a.ncols());
    let k = h.min(w);
    let eps = precision.eps();

    let mut r = a.clone();
    let mut l = Matrix::eye(h, k);
    let mut p = Matrix::identity(h);
    let mut swaps = 0u32;

    let mut row = 1;
    let mut col = 1;
    while row <= h && col <= w {
        // Largest-magnitude pivot candidate at or below the current row.
        let mut max_index = row;
        let mut max_value = r[(row, col)].abs();
        for i in row + 1..=h {
            if r[(i, col)].abs() > max_value {
                max_index = i;
                max_value = r[(i, col)].abs();
            }
        }

        // Free column: nothing to eliminate, move right only.
        if max_value < eps {
            col += 1;
            continue;
        }

        if row != max_index {
            swaps += 1;
            // Only the already-computed multiplier columns move in L.
            if row > 1 {
                l.swap_rows(row, max_index, 1, row - 1);
            }
            r.swap_rows(row, max_index, 1, w);
            p.swap_rows(row, max_index, 1, h);
        }

        // Multipliers are stored by pivot index, not by pivot column,
        // so skipped columns never push the write past L's width and
        // the unit-lower structure survives rank deficiency.
        for i in row + 1..=h {
            let coefficient = r[(i, col)] / r[(row, col)];
            l[(i, row)] = coefficient;
            r[(i, col)] = 0.0;
            for j in col + 1..=w {
                r[(i, j)] -= r[(row, j)] * coefficient;
            }
        }

        row += 1;
        col += 1;
    }

    let u = r.block(1, k, 1, w);
    Lu { l, u, p, swaps }
}

/// Determinant via LU: the product of both factor diagonals, negated
/// for an odd number of row swaps. Rounded to `precision`.
pub fn determinant(a: &Matrix, precision: Precision) -> Result<f64, MatrixError> {
    if !a.is_square() {
        return Err(MatrixError::NonSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }

    let f = factor(a, precision);
    let sign = if f.swaps % 2 == 0 { 1.0 } else { -1.0 };

    let mut det = sign;
    for i in 1..=f.l.ncols() {
        det *= f.l[(i, i)];
    }
    for i in 1..=f.u.nrows() {
        det *= f.u[(i, i)];
    }

    Ok(precision.round(det))
}

/// Matrix inverse as `U^-1 * L^-1 * P`.
///
/// Fails with [`MatrixError::Singular`] when the determinant is exactly
/// zero at the given precision.
pub fn inverse(a: &Matrix, precision: Precision) -> Result<Matrix, MatrixError> {
    if determinant(a, precision)? == 0.0 {
        return Err(MatrixError::Singular);
    }

    let f = factor(a, precision);
    Ok(invert_upper(&f.u)? * invert_lower(&f.l)? * f.p)
}

/// Solve `A x = b` as `A^-1 * b`.
///
/// `b` may carry multiple right-hand sides as columns; its row count
/// must match `a`.
pub fn lin_sys(a: &Matrix, b: &Matrix, precision: Precision) -> Result<Matrix, MatrixError> {
    if !a.is_square() {
        return Err(MatrixError::NonSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }
    if b.nrows() != a.nrows() {
        return Err(MatrixError::DimensionMismatch {
            expected: (a.nrows(), b.ncols()),
            got: (b.nrows(), b.ncols()),
        });
    }
    Ok(inverse(a, precision)? * b)
}

/// Convenience methods delegating to the free functions.
impl Matrix {
    /// LU factorization with partial pivoting.
    pub fn lu(&self, precision: Precision) -> Lu {
        factor(self, precision)
    }

    /// Determinant.
    ///
    /// ```
    /// use realmat::{Matrix, Precision};
    /// let a = Matrix::from([[3.0, 8.0], [4.0, 6.0]]);
    /// assert_eq!(a.det(Precision::FULL).unwrap(), -14.0);
    /// ```
    pub fn det(&self, precision: Precision) -> Result<f64, MatrixError> {
        determinant(self, precision)
    }

    /// Matrix inverse.
    pub fn inverse(&self, precision: Precision) -> Result<Matrix, MatrixError> {
        inverse(self, precision)
    }

    /// Solve `self * x = b`.
    pub fn solve(&self, b: &Matrix, precision: Precision) -> Result<Matrix, MatrixError> {
        lin_sys(self, b, precision)
    }
}
