//! Reduction to upper Hessenberg form.

use crate::error::MatrixError;
use crate::linalg::qr::reflector;
use crate::matrix::Matrix;
use crate::precision::Precision;

/// Reduce a square matrix to upper Hessenberg form by a sequence of
/// Householder similarity transforms `H A H^T`.
///
/// The result is similar to the input: eigenvalues, trace, and the
/// Frobenius norm are preserved. Entries below the first sub-diagonal
/// are annihilated. The result is rounded to `precision`.
pub fn reduce(a: &Matrix, precision: Precision) -> Result<Matrix, MatrixError> {
    if !a.is_square() {
        return Err(MatrixError::NonSquare {
            nrows: a.nrows(),
            ncols: a.ncols(),
        });
    }

    let n = a.nrows();
    let mut m = a.clone();

    for s in 1..=n.saturating_sub(2) {
        // Eliminate column s below the sub-diagonal; the transform acts
        // on rows s+1.. so the pivot row itself stays put and the
        // similarity holds.
        let column = m.block(1 + s, n, s, s);
        let reflection = reflector(n, &column, s + 1);
        m = &reflection * &m * reflection.transpose();
    }

    Ok(m.round(precision))
}

#[cfg(test)]
mod tests {
    use super::*;

    const P: Precision = Precision::FULL;

    fn trace(m: &Matrix) -> f64 {
        (1..=m.nrows()).map(|i| m[(i, i)]).sum()
    }

    #[test]
    fn zeroes_below_subdiagonal() {
        let a = Matrix::from([
            [4.0, 1.0, -2.0, 2.0],
            [1.0, 2.0, 0.0, 1.0],
            [-2.0, 0.0, 3.0, -2.0],
            [2.0, 1.0, -2.0, -1.0],
        ]);
        let h = reduce(&a, P).unwrap();
        for c in 1..=4 {
            for r in c + 2..=4 {
                assert!(h[(r, c)].abs() < 1e-12, "h[({}, {})] = {}", r, c, h[(r, c)]);
            }
        }
    }

    #[test]
    fn similarity_invariants() {
        let a = Matrix::from([
            [4.0, 2.0, 1.0, 3.0],
            [1.0, 3.0, 2.0, 1.0],
            [0.0, 2.0, 5.0, 4.0],
            [2.0, 1.0, 3.0, 6.0],
        ]);
        let h = reduce(&a, P).unwrap();
        assert!((trace(&h) - trace(&a)).abs() < 1e-10);
        assert!((h.norm() - a.norm()).abs() < 1e-10);
        let det_a = a.det(P).unwrap();
        let det_h = h.det(P).unwrap();
        assert!((det_a - det_h).abs() < 1e-8 * det_a.abs().max(1.0));
    }

    #[test]
    fn small_matrices_pass_through() {
        // Nothing to eliminate below the sub-diagonal of a 1x1 or 2x2.
        let a = Matrix::from([[3.0, 1.0], [7.0, 2.0]]);
        assert_eq!(reduce(&a, P).unwrap(), a);
        let b = Matrix::from([[5.0]]);
        assert_eq!(reduce(&b, P).unwrap(), b);
    }

    #[test]
    fn symmetric_becomes_tridiagonal() {
        let a = Matrix::from([
            [2.0, -1.0, 3.0],
            [-1.0, 4.0, 0.5],
            [3.0, 0.5, 1.0],
        ]);
        let h = reduce(&a, P).unwrap();
        assert!(h[(3, 1)].abs() < 1e-12);
        assert!(h[(1, 3)].abs() < 1e-12);
    }

    #[test]
    fn non_square_rejected() {
        let a = Matrix::zeros(2, 3);
        assert_eq!(
            reduce(&a, P),
            Err(MatrixError::NonSquare { nrows: 2, ncols: 3 })
        );
    }

    #[test]
    fn result_is_rounded() {
        let a = Matrix::from([
            [4.0, 1.0, -2.0],
            [1.0, 2.0, 0.3],
            [-2.0, 0.3, 3.0],
        ]);
        let p = Precision::new(4);
        let h = reduce(&a, p).unwrap();
        assert_eq!(h, h.round(p));
    }
}
