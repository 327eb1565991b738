//! Error types for matrix construction, access, and linear algebra.

/// Errors from matrix element access, shape-sensitive operations, and
/// decomposition-backed solvers.
///
/// ```
/// use realmat::{Matrix, MatrixError, Precision};
///
/// let singular = Matrix::from([[1.0, 2.0], [2.0, 4.0]]);
/// assert_eq!(
///     singular.inverse(Precision::FULL).unwrap_err(),
///     MatrixError::Singular
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// A 1-based index fell outside the matrix. Carries the offending
    /// index pair and the matrix shape.
    OutOfRange {
        row: usize,
        col: usize,
        nrows: usize,
        ncols: usize,
    },
    /// Operand shapes are incompatible for the requested operation.
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },
    /// The operation is only defined for square matrices.
    NonSquare { nrows: usize, ncols: usize },
    /// Matrix is singular (zero determinant).
    Singular,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::OutOfRange {
                row,
                col,
                nrows,
                ncols,
            } => write!(
                f,
                "index ({}, {}) out of range for {}x{} matrix",
                row, col, nrows, ncols
            ),
            MatrixError::DimensionMismatch { expected, got } => write!(
                f,
                "dimension mismatch: expected {}x{}, got {}x{}",
                expected.0, expected.1, got.0, got.1
            ),
            MatrixError::NonSquare { nrows, ncols } => {
                write!(f, "operation requires a square matrix, got {}x{}", nrows, ncols)
            }
            MatrixError::Singular => write!(f, "matrix is singular"),
        }
    }
}

impl std::error::Error for MatrixError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = MatrixError::OutOfRange {
            row: 4,
            col: 1,
            nrows: 3,
            ncols: 2,
        };
        assert_eq!(e.to_string(), "index (4, 1) out of range for 3x2 matrix");

        let e = MatrixError::DimensionMismatch {
            expected: (2, 2),
            got: (3, 2),
        };
        assert_eq!(e.to_string(), "dimension mismatch: expected 2x2, got 3x2");

        let e = MatrixError::NonSquare { nrows: 2, ncols: 3 };
        assert_eq!(e.to_string(), "operation requires a square matrix, got 2x3");

        assert_eq!(MatrixError::Singular.to_string(), "matrix is singular");
    }
}
