//! Arithmetic operators and element-wise helpers.
//!
//! The `+`, `-`, and `*` operators panic on incompatible shapes; the
//! `checked_*` methods return [`MatrixError::DimensionMismatch`] instead.

use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::MatrixError;
use crate::matrix::Matrix;

impl Matrix {
    fn same_shape(&self, rhs: &Matrix) -> Result<(), MatrixError> {
        if (self.nrows, self.ncols) != (rhs.nrows, rhs.ncols) {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.nrows, self.ncols),
                got: (rhs.nrows, rhs.ncols),
            });
        }
        Ok(())
    }

    /// Element-wise combine. Shapes must already match.
    fn zip(&self, rhs: &Matrix, f: impl Fn(f64, f64) -> f64) -> Matrix {
        Matrix {
            data: self
                .data
                .iter()
                .zip(rhs.data.iter())
                .map(|(&a, &b)| f(a, b))
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Matrix product. Inner dimensions must already match.
    fn matmul(&self, rhs: &Matrix) -> Matrix {
        let (m, k, n) = (self.nrows, self.ncols, rhs.ncols);
        let mut out = Matrix::zeros(m, n);
        for j in 0..n {
            for l in 0..k {
                let b = rhs.data[j * k + l];
                for i in 0..m {
                    out.data[j * m + i] += self.data[l * m + i] * b;
                }
            }
        }
        out
    }

    /// Element-wise sum, or a dimension-mismatch error.
    pub fn checked_add(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.same_shape(rhs)?;
        Ok(self.zip(rhs, |a, b| a + b))
    }

    /// Element-wise difference, or a dimension-mismatch error.
    pub fn checked_sub(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.same_shape(rhs)?;
        Ok(self.zip(rhs, |a, b| a - b))
    }

    /// Matrix product, or a dimension-mismatch error when the left
    /// column count differs from the right row count.
    pub fn checked_mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.ncols != rhs.nrows {
            return Err(MatrixError::DimensionMismatch {
                expected: (self.ncols, rhs.ncols),
                got: (rhs.nrows, rhs.ncols),
            });
        }
        Ok(self.matmul(rhs))
    }

    /// Apply `f` to every element.
    ///
    /// ```
    /// use realmat::Matrix;
    /// let m = Matrix::from([[1.0, -2.0]]);
    /// assert_eq!(m.map(f64::abs), Matrix::from([[1.0, 2.0]]));
    /// ```
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Matrix {
        Matrix {
            data: self.data.iter().map(|&x| f(x)).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }

    /// Multiply every element by `s`.
    pub fn scale(&self, s: f64) -> Matrix {
        self.map(|x| x * s)
    }
}

// ── Add / Sub ────────────────────────────────────────────────────────

impl Add<&Matrix> for &Matrix {
    type Output = Matrix;
    fn add(self, rhs: &Matrix) -> Matrix {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols
        );
        self.zip(rhs, |a, b| a + b)
    }
}

impl Add<Matrix> for Matrix {
    type Output = Matrix;
    fn add(self, rhs: Matrix) -> Matrix {
        &self + &rhs
    }
}

impl Add<&Matrix> for Matrix {
    type Output = Matrix;
    fn add(self, rhs: &Matrix) -> Matrix {
        &self + rhs
    }
}

impl Add<Matrix> for &Matrix {
    type Output = Matrix;
    fn add(self, rhs: Matrix) -> Matrix {
        self + &rhs
    }
}

impl Sub<&Matrix> for &Matrix {
    type Output = Matrix;
    fn sub(self, rhs: &Matrix) -> Matrix {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows,
            self.ncols,
            rhs.nrows,
            rhs.ncols
        );
        self.zip(rhs, |a, b| a - b)
    }
}

impl Sub<Matrix> for Matrix {
    type Output = Matrix;
    fn sub(self, rhs: Matrix) -> Matrix {
        &self - &rhs
    }
}

impl Sub<&Matrix> for Matrix {
    type Output = Matrix;
    fn sub(self, rhs: &Matrix) -> Matrix {
        &self - rhs
    }
}

impl Sub<Matrix> for &Matrix {
    type Output = Matrix;
    fn sub(self, rhs: Matrix) -> Matrix {
        self - &rhs
    }
}

// ── Matrix product ───────────────────────────────────────────────────

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols
        );
        self.matmul(rhs)
    }
}

impl Mul<Matrix> for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}

impl Mul<&Matrix> for Matrix {
    type Output = Matrix;
    fn mul(self, rhs: &Matrix) -> Matrix {
        &self * rhs
    }
}

impl Mul<Matrix> for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Matrix) -> Matrix {
        self * &rhs
    }
}

// ── Scalar product / quotient ────────────────────────────────────────

impl Mul<f64> for &Matrix {
    type Output = Matrix;
    fn mul(self, s: f64) -> Matrix {
        self.scale(s)
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;
    fn mul(self, s: f64) -> Matrix {
        self.scale(s)
    }
}

impl Mul<&Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, m: &Matrix) -> Matrix {
        m.scale(self)
    }
}

impl Mul<Matrix> for f64 {
    type Output = Matrix;
    fn mul(self, m: Matrix) -> Matrix {
        m.scale(self)
    }
}

impl Div<f64> for &Matrix {
    type Output = Matrix;
    fn div(self, s: f64) -> Matrix {
        self.map(|x| x / s)
    }
}

impl Div<f64> for Matrix {
    type Output = Matrix;
    fn div(self, s: f64) -> Matrix {
        self.map(|x| x / s)
    }
}

impl Neg for &Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        self.map(|x| -x)
    }
}

impl Neg for Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        self.map(|x| -x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sub() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from([[10.0, 20.0], [30.0, 40.0]]);

        let sum = &a + &b;
        assert_eq!(sum, Matrix::from([[11.0, 22.0], [33.0, 44.0]]));

        let diff = &b - &a;
        assert_eq!(diff, Matrix::from([[9.0, 18.0], [27.0, 36.0]]));

        // Owned variants delegate to the reference impls.
        assert_eq!(a.clone() + b.clone(), sum);
        assert_eq!(b.clone() - &a, diff);
    }

    #[test]
    fn checked_shape_mismatch() {
        let a = Matrix::zeros(2, 2);
        let b = Matrix::zeros(3, 2);
        assert_eq!(
            a.checked_add(&b),
            Err(MatrixError::DimensionMismatch {
                expected: (2, 2),
                got: (3, 2)
            })
        );
        assert!(a.checked_sub(&b).is_err());
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn add_panics_on_mismatch() {
        let a = Matrix::zeros(2, 2);
        let b = Matrix::zeros(2, 3);
        let _ = &a + &b;
    }

    #[test]
    fn matrix_product() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let b = Matrix::from([[5.0, 6.0], [7.0, 8.0]]);
        assert_eq!(&a * &b, Matrix::from([[19.0, 22.0], [43.0, 50.0]]));

        // Rectangular: 2x3 * 3x1
        let m = Matrix::from([[1.0, 0.0, 2.0], [0.0, 3.0, 1.0]]);
        let v = Matrix::from_rows(3, 1, &[1.0, 2.0, 3.0]);
        assert_eq!(&m * &v, Matrix::from_rows(2, 1, &[7.0, 9.0]));
    }

    #[test]
    fn product_identity() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(&a * &Matrix::identity(2), a);
        assert_eq!(&Matrix::identity(2) * &a, a);
    }

    #[test]
    fn checked_mul_inner_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);
        assert_eq!(
            a.checked_mul(&b),
            Err(MatrixError::DimensionMismatch {
                expected: (3, 2),
                got: (2, 2)
            })
        );
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn mul_panics_on_inner_mismatch() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 2);
        let _ = &a * &b;
    }

    #[test]
    fn scalar_ops() {
        let a = Matrix::from([[1.0, -2.0]]);
        assert_eq!(&a * 2.0, Matrix::from([[2.0, -4.0]]));
        assert_eq!(2.0 * &a, Matrix::from([[2.0, -4.0]]));
        assert_eq!(a.clone() / 2.0, Matrix::from([[0.5, -1.0]]));
        assert_eq!(-&a, Matrix::from([[-1.0, 2.0]]));
    }

    #[test]
    fn map_and_scale() {
        let a = Matrix::from([[1.0, 4.0], [9.0, 16.0]]);
        assert_eq!(
            a.map(f64::sqrt),
            Matrix::from([[1.0, 2.0], [3.0, 4.0]])
        );
        assert_eq!(a.scale(0.5), Matrix::from([[0.5, 2.0], [4.5, 8.0]]));
    }
}
