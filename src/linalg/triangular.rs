//! Triangular matrix inversion by substitution.

use crate::error::MatrixError;
use crate::matrix::Matrix;

/// Invert an upper-triangular matrix by back substitution, solving
/// `M X = I` column by column.
///
/// Entries below the diagonal are ignored. A zero diagonal entry is not
/// detected here; it propagates non-finite values into the result.
pub fn invert_upper(m: &Matrix) -> Result<Matrix, MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NonSquare {
            nrows: m.nrows(),
            ncols: m.ncols(),
        });
    }
    let n = m.nrows();
    let mut x = Matrix::square(n);
    for c in 1..=n {
        for r in (1..=n).rev() {
            let mut sum = if r == c { 1.0 } else { 0.0 };
            for k in r + 1..=n {
                sum -= m[(r, k)] * x[(k, c)];
            }
            x[(r, c)] = sum / m[(r, r)];
        }
    }
    Ok(x)
}

/// Invert a lower-triangular matrix by forward substitution.
///
/// Mirror image of [`invert_upper`]; entries above the diagonal are
/// ignored.
pub fn invert_lower(m: &Matrix) -> Result<Matrix, MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NonSquare {
            nrows: m.nrows(),
            ncols: m.ncols(),
        });
    }
    let n = m.nrows();
    let mut x = Matrix::square(n);
    for c in 1..=n {
        for r in 1..=n {
            let mut sum = if r == c { 1.0 } else { 0.0 };
            for k in 1..r {
                sum -= m[(r, k)] * x[(k, c)];
            }
            x[(r, c)] = sum / m[(r, r)];
        }
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_identity(m: &Matrix, tol: f64) {
        for r in 1..=m.nrows() {
            for c in 1..=m.ncols() {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert!(
                    (m[(r, c)] - expected).abs() < tol,
                    "entry ({}, {}) = {}",
                    r,
                    c,
                    m[(r, c)]
                );
            }
        }
    }

    #[test]
    fn upper_inverse() {
        let u = Matrix::from([
            [2.0, 1.0, 3.0],
            [0.0, 4.0, -1.0],
            [0.0, 0.0, 0.5],
        ]);
        let inv = invert_upper(&u).unwrap();
        assert_identity(&(&u * &inv), 1e-12);
        assert_identity(&(&inv * &u), 1e-12);
        // Inverse of upper-triangular stays upper-triangular.
        assert_eq!(inv[(2, 1)], 0.0);
        assert_eq!(inv[(3, 1)], 0.0);
        assert_eq!(inv[(3, 2)], 0.0);
    }

    #[test]
    fn lower_inverse() {
        let l = Matrix::from([
            [1.0, 0.0, 0.0],
            [2.0, 3.0, 0.0],
            [-1.0, 4.0, 2.0],
        ]);
        let inv = invert_lower(&l).unwrap();
        assert_identity(&(&l * &inv), 1e-12);
        assert_identity(&(&inv * &l), 1e-12);
        assert_eq!(inv[(1, 2)], 0.0);
        assert_eq!(inv[(1, 3)], 0.0);
        assert_eq!(inv[(2, 3)], 0.0);
    }

    #[test]
    fn unit_triangular() {
        // Unit lower-triangular inverse has a unit diagonal too.
        let l = Matrix::from([
            [1.0, 0.0],
            [5.0, 1.0],
        ]);
        let inv = invert_lower(&l).unwrap();
        assert_eq!(inv, Matrix::from([[1.0, 0.0], [-5.0, 1.0]]));
    }

    #[test]
    fn non_square_rejected() {
        let m = Matrix::zeros(2, 3);
        assert_eq!(
            invert_upper(&m),
            Err(MatrixError::NonSquare { nrows: 2, ncols: 3 })
        );
        assert!(invert_lower(&m).is_err());
    }
}
