//! Per-call precision configuration.
//!
//! Every algorithm entry point takes a [`Precision`] argument instead of
//! consulting process-wide state, so concurrent callers with different
//! precision needs never interfere.

/// Number of significant decimal digits carried through computations.
///
/// Controls two things:
/// - the epsilon `10^-digits` used as pivot and convergence threshold,
/// - the decimal rounding applied to results.
///
/// Sixteen digits is the full-precision sentinel: the epsilon is still
/// `1e-16`, but rounding becomes a no-op since `f64` cannot hold more
/// decimal digits anyway.
///
/// ```
/// use realmat::Precision;
///
/// let p = Precision::new(3);
/// assert_eq!(p.round(1.23456), 1.235);
/// assert_eq!(p.eps(), 1e-3);
/// assert!(Precision::FULL.is_full());
/// assert_eq!(Precision::FULL.round(0.1 + 0.2), 0.1 + 0.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision(u32);

impl Precision {
    /// Full double precision; rounding is the identity.
    pub const FULL: Precision = Precision(16);

    /// Precision of `digits` decimal digits, capped at the full sentinel.
    pub fn new(digits: u32) -> Self {
        Precision(digits.min(16))
    }

    /// The configured digit count.
    pub fn digits(self) -> u32 {
        self.0
    }

    /// Whether this is the full-precision sentinel.
    pub fn is_full(self) -> bool {
        self.0 >= 16
    }

    /// Magnitude threshold `10^-digits` below which values are treated
    /// as zero by pivot selection and convergence checks.
    pub fn eps(self) -> f64 {
        10f64.powi(-(self.0 as i32))
    }

    /// Round `x` to the configured number of decimal digits.
    /// Identity at full precision.
    pub fn round(self, x: f64) -> f64 {
        if self.is_full() {
            return x;
        }
        let scale = 10f64.powi(self.0 as i32);
        (x * scale).round() / scale
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision::FULL
    }
}
