//! Real eigenvalues by unshifted QR iteration.

use crate::error::MatrixError;
use crate::linalg::{givens, hessenberg};
use crate::matrix::Matrix;
use crate::precision::Precision;

/// Outcome of the eigenvalue iteration.
///
/// The iteration only converges when all eigenvalues are real and of
/// distinct magnitude; a rotation block, for instance, cycles forever.
/// Non-convergence is an ordinary outcome callers must handle, not an
/// error.
#[derive(Debug, Clone, PartialEq)]
pub enum Eigenvalues {
    /// Eigenvalues in the order they settled on the diagonal.
    Converged(Vec<f64>),
    /// The sub-diagonal error stopped shrinking before it reached the
    /// epsilon threshold.
    DidNotConverge,
}

impl Eigenvalues {
    pub fn is_converged(&self) -> bool {
        matches!(self, Eigenvalues::Converged(_))
    }

    /// The eigenvalues, when the iteration converged.
    pub fn values(&self) -> Option<&[f64]> {
        match self {
            Eigenvalues::Converged(v) => Some(v),
            Eigenvalues::DidNotConverge => None,
        }
    }
}

/// Compute the eigenvalues of a square matrix.
///
/// The matrix is reduced to Hessenberg form, then driven towards an
/// upper triangle by repeated Givens QR steps `A <- R * Q`. Convergence
/// is reached when every sub-diagonal magnitude drops to
/// `precision.eps()` or below; the iteration gives up once it has run
/// more than three times without strictly shrinking the sub-diagonal
/// error. Eigenvalues are read off the diagonal and rounded to
/// `precision`.
///
/// # Example
///
/// ```
/// use realmat::{linalg, Matrix, Precision};
///
/// let a = Matrix::from([[2.0, 1.0], [0.0, 3.0]]);
/// let eig = linalg::eigen::eigenvalues(&a, Precision::new(10)).unwrap();
/// assert_eq!(eig.values(), Some(&[2.0, 3.0][..]));
/// ```
pub fn eigenvalues(a: &Matrix, precision: Precision) -> Result<Eigenvalues, MatrixError> {
    let h = hessenberg::reduce(a, precision)?;
    match triangularize(h, precision) {
        Some(t) => {
            let values = (1..=t.ncols())
                .map(|i| precision.round(t[(i, i)]))
                .collect();
            Ok(Eigenvalues::Converged(values))
        }
        None => Ok(Eigenvalues::DidNotConverge),
    }
}

/// Drive a Hessenberg matrix towards upper-triangular form, or bail
/// out when progress stalls.
fn triangularize(mut m: Matrix, precision: Precision) -> Option<Matrix> {
    let eps = precision.eps();

    let mut iteration = 0u32;
    let mut error = 0.0;
    loop {
        iteration += 1;
        let last_error = error;
        error = 0.0;
        let mut repeat = false;
        for i in 1..m.ncols() {
            let sub = m[(i + 1, i)].abs();
            error += sub;
            if sub > eps {
                repeat = true;
            }
        }

        // Stalling takes precedence over the convergence check.
        if iteration > 3 && last_error - error <= 0.0 {
            return None;
        }
        if !repeat {
            return Some(m);
        }

        let qr = givens::factor(&m, precision);
        m = qr.r * qr.q;
    }
}
