/// Largest base-2 exponent whose linear value still fits in an f64.
/// Anything above it materializes as the overflow sentinel.
pub const MAX_FINITE_LOG2: f64 = 1023.0;

/// A positive quantity held as log2 of its linear value.
///
/// Attack costs in this crate span ranges like 2^256 seconds, far past
/// what linear floating point can carry without collapsing to infinity.
/// All arithmetic therefore stays in the log domain; the linear value
/// exists only at the serialization boundary, paired with an overflow
/// flag when the exponent is out of range.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Magnitude {
    log2: f64,
}

impl Magnitude {
    pub fn from_log2(log2: f64) -> Self {
        Self { log2 }
    }

    /// Builds a magnitude from a linear value. The value must be positive.
    pub fn from_linear(value: f64) -> Self {
        debug_assert!(value > 0.0, "magnitude requires a positive value");
        Self { log2: value.log2() }
    }

    pub fn log2(&self) -> f64 {
        self.log2
    }

    /// Multiplies the linear value by `factor` (a log-domain addition).
    pub fn scale(&self, factor: f64) -> Self {
        debug_assert!(factor > 0.0, "scale factor must be positive");
        Self {
            log2: self.log2 + factor.log2(),
        }
    }

    /// Materializes the linear value together with the overflow flag.
    /// Exponents past [`MAX_FINITE_LOG2`] cap at `f64::MAX` and set the
    /// flag; everything else converts exactly as `2^log2`.
    pub fn to_linear(&self) -> (f64, bool) {
        if self.log2 > MAX_FINITE_LOG2 {
            (f64::MAX, true)
        } else {
            (2f64.powf(self.log2), false)
        }
    }
}
