//! Norms and decimal rounding.

use crate::matrix::Matrix;
use crate::precision::Precision;

impl Matrix {
    /// Frobenius norm: square root of the sum of squared elements.
    ///
    /// ```
    /// use realmat::Matrix;
    /// let m = Matrix::from([[3.0, 0.0], [0.0, 4.0]]);
    /// assert_eq!(m.norm(), 5.0);
    /// ```
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|&x| x * x).sum::<f64>().sqrt()
    }

    /// Round every element to the given precision.
    /// A no-op clone at full precision.
    pub fn round(&self, precision: Precision) -> Matrix {
        if precision.is_full() {
            return self.clone();
        }
        self.map(|x| precision.round(x))
    }
}
