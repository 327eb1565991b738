//! Text rendering: `Display` and the column-aligned pretty printer.

use core::fmt;

use crate::matrix::Matrix;
use crate::precision::Precision;

/// Fractional digits used by `pretty` at full precision.
const PRETTY_DEFAULT_DIGITS: usize = 6;

impl fmt::Display for Matrix {
    /// One line per row, elements separated by single spaces, full
    /// shortest-round-trip `f64` formatting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 1..=self.nrows {
            if r > 1 {
                writeln!(f)?;
            }
            for c in 1..=self.ncols {
                if c > 1 {
                    write!(f, " ")?;
                }
                write!(f, "{}", self[(r, c)])?;
            }
        }
        Ok(())
    }
}

impl Matrix {
    /// Fixed-point rendering with right-aligned columns.
    ///
    /// Each element is printed with `precision` fractional digits (six at
    /// the full-precision sentinel) and padded to its column's widest
    /// rendered entry.
    ///
    /// ```
    /// use realmat::{Matrix, Precision};
    /// let m = Matrix::from([[1.0, -10.5], [200.0, 0.25]]);
    /// let text = m.pretty(Precision::new(2));
    /// assert_eq!(text, "  1.00 -10.50\n200.00   0.25");
    /// ```
    pub fn pretty(&self, precision: Precision) -> String {
        let digits = if precision.is_full() {
            PRETTY_DEFAULT_DIGITS
        } else {
            precision.digits() as usize
        };

        let cells: Vec<Vec<String>> = (1..=self.nrows)
            .map(|r| {
                (1..=self.ncols)
                    .map(|c| format!("{:.*}", digits, self[(r, c)]))
                    .collect()
            })
            .collect();

        let widths: Vec<usize> = (0..self.ncols)
            .map(|c| cells.iter().map(|row| row[c].len()).max().unwrap_or(0))
            .collect();

        let lines: Vec<String> = cells
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(c, cell)| format!("{:>width$}", cell, width = widths[c]))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        lines.join("\n")
    }
}
