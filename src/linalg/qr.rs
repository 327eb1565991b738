//! QR factorization by Householder reflections.

use crate::linalg::sign;
use crate::matrix::Matrix;
use crate::precision::Precision;

/// Result of a QR factorization: `A = Q * R` with `Q` orthonormal and
/// `R` upper-triangular, in economy shapes `h x min(h, w)` and
/// `min(h, w) x w`.
#[derive(Debug, Clone)]
pub struct Qr {
    pub q: Matrix,
    pub r: Matrix,
}

/// Full-size Householder reflector eliminating the tail of `v`.
///
/// `v` is the column to reflect, taken from rows `offset..` of an
/// `n x n` working matrix. The reflection direction is `v - alpha e1`
/// with `alpha = -sign(v_1) |v|` (sign of zero is zero), which avoids
/// cancellation against the pivot entry. A zero vector degenerates to
/// the identity. The small reflector is embedded into an `n x n`
/// identity at the offset.
pub(crate) fn reflector(n: usize, v: &Matrix, offset: usize) -> Matrix {
    let m = v.nrows();
    let alpha = -sign(v[(1, 1)]) * v.norm();

    let mut u = v.clone();
    u[(1, 1)] -= alpha;
    let norm = u.norm();
    if norm != 0.0 {
        u = u / norm;
    }

    let small = Matrix::identity(m) - (&u * &u.transpose()) * 2.0;
    Matrix::identity(n).paste(offset, offset, &small)
}

/// Householder QR factorization.
///
/// One reflector per pivot column zeroes everything below the pivot;
/// the accumulated product of reflectors forms `Q`. Both factors are
/// rounded to `precision` before being returned.
///
/// # Example
///
/// ```
/// use realmat::{linalg, Matrix, Precision};
///
/// let a = Matrix::from([[2.0, 1.0], [1.0, 3.0]]);
/// let qr = linalg::qr::factor(&a, Precision::FULL);
/// let back = &qr.q * &qr.r;
/// assert!((back[(1, 1)] - 2.0).abs() < 1e-12);
/// assert!(qr.r[(2, 1)].abs() < 1e-12);
/// ```
pub fn factor(a: &Matrix, precision: Precision) -> Qr {
    let (h, w) = (a.nrows(), a.ncols());
    let k = h.min(w);

    let mut r = a.clone();
    let mut q = Matrix::identity(h);

    for c in 1..=k {
        let v = r.block(c, h, c, c);
        let reflection = reflector(h, &v, c);
        q = q * &reflection;
        r = reflection * r;
    }

    let q = q.block(1, h, 1, k);
    let r = r.block(1, k, 1, w);
    Qr {
        q: q.round(precision),
        r: r.round(precision),
    }
}
