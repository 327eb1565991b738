//! Matrix factorizations and decomposition-backed solvers.

pub mod eigen;
pub mod givens;
pub mod hessenberg;
pub mod lu;
pub mod qr;
pub mod triangular;

pub use eigen::{eigenvalues, Eigenvalues};
pub use lu::{determinant, inverse, lin_sys, Lu};
pub use qr::Qr;
pub use triangular::{invert_lower, invert_upper};

/// Sign of `x` with `sign(0) = 0`, unlike `f64::signum`.
pub(crate) fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
