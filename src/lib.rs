//! # realmat
//!
//! Dense real-matrix algebra over `f64`.
//!
//! The crate centers on [`Matrix`], a heap-allocated column-major dense
//! matrix addressed with **1-based** `(row, col)` indices, and a set of
//! classical factorizations built on top of it:
//!
//! - LU with partial pivoting ([`linalg::lu`]), backing determinant,
//!   inverse, and linear-system solving,
//! - Householder QR ([`linalg::qr`]) and Givens QR ([`linalg::givens`]),
//! - Hessenberg reduction ([`linalg::hessenberg`]),
//! - real eigenvalues by unshifted QR iteration ([`linalg::eigen`]),
//! - triangular inversion by substitution ([`linalg::triangular`]).
//!
//! Numeric behavior is controlled per call through [`Precision`], which
//! fixes both the zero/convergence threshold and the decimal rounding
//! applied to results. Matrices can be persisted to a plain-text `.mat`
//! format ([`io`]) that round-trips every value bit-exactly.
//!
//! ```
//! use realmat::{linalg, Matrix, Precision};
//!
//! let a = Matrix::from([
//!     [2.0, 1.0, -1.0],
//!     [-3.0, -1.0, 2.0],
//!     [-2.0, 1.0, 2.0],
//! ]);
//! let b = Matrix::from_rows(3, 1, &[8.0, -11.0, -3.0]);
//!
//! let x = a.solve(&b, Precision::FULL).unwrap();
//! assert!((x[(1, 1)] - 2.0).abs() < 1e-10);
//!
//! let qr = linalg::qr::factor(&a, Precision::FULL);
//! let back = &qr.q * &qr.r;
//! assert!((back[(3, 2)] - 1.0).abs() < 1e-10);
//! ```

pub mod error;
pub mod io;
pub mod linalg;
pub mod matrix;
pub mod precision;

pub use error::MatrixError;
pub use io::FileError;
pub use linalg::{Eigenvalues, Lu, Qr};
pub use matrix::Matrix;
pub use precision::Precision;
