// ============================================================================
// Decimal Context
// Explicit precision context for arbitrary-precision arithmetic
// ============================================================================

use super::errors::{FigureError, FigureResult};
use bigdecimal::{BigDecimal, Context, RoundingMode};
use std::num::NonZeroU64;

/// Default number of significant digits for decimal computations.
pub const DEFAULT_DIGITS: u64 = 100;

/// Precision context for one decimal computation.
///
/// A context is a plain value created at the start of an `area()` call and
/// passed to every operation that rounds. There is no process-wide precision
/// setting, so concurrent computations never observe each other's context.
///
/// Rounding is half-even, matching the usual decimal arithmetic default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalContext {
    digits: NonZeroU64,
}

impl DecimalContext {
    #[inline]
    pub const fn new(digits: NonZeroU64) -> Self {
        Self { digits }
    }

    /// Create a context from a digit count.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `digits` is zero.
    pub fn with_digits(digits: u64) -> FigureResult<Self> {
        NonZeroU64::new(digits)
            .map(Self::new)
            .ok_or(FigureError::InvalidPrecision)
    }

    /// Number of significant digits kept after each rounding step.
    #[inline]
    pub const fn digits(&self) -> u64 {
        self.digits.get()
    }

    /// Round `value` to this context's significant digits.
    #[inline]
    pub fn round(&self, value: &BigDecimal) -> BigDecimal {
        value.with_precision_round(self.digits, RoundingMode::HalfEven)
    }

    /// Rounded product.
    #[inline]
    pub fn mul(&self, lhs: &BigDecimal, rhs: &BigDecimal) -> BigDecimal {
        self.round(&(lhs * rhs))
    }

    /// Square root to this context's precision. `None` for negative input.
    pub fn sqrt(&self, value: &BigDecimal) -> Option<BigDecimal> {
        value.sqrt_with_context(&Context::new(self.digits, RoundingMode::HalfEven))
    }
}

impl Default for DecimalContext {
    fn default() -> Self {
        match NonZeroU64::new(DEFAULT_DIGITS) {
            Some(digits) => Self::new(digits),
            None => unreachable!("default precision is non-zero"),
        }
    }
}
