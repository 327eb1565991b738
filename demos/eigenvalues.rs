//! Compute and print the eigenvalues of a small matrix.

use realmat::{linalg, Eigenvalues, Matrix, Precision};

fn main() {
    let a = Matrix::from([
        [1.0, 2.0, 3.0],
        [4.0, 5.0, 6.0],
        [7.0, 8.0, 9.0],
    ]);
    let precision = Precision::new(8);

    println!("{}", a.pretty(precision));
    println!();

    match linalg::eigen::eigenvalues(&a, precision) {
        Ok(Eigenvalues::Converged(values)) => {
            for value in values {
                println!("{value}");
            }
        }
        Ok(Eigenvalues::DidNotConverge) => {
            println!("eigenvalue iteration did not converge");
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}
