// ============================================================================
// Precision Configuration
// Decimal precision carried by every figure
// ============================================================================

use crate::numeric::{DecimalContext, FigureResult, DEFAULT_DIGITS};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Precision settings for high-precision area computations.
///
/// Only affects figures whose parameters include a decimal; float and integer
/// inputs always compute in `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PrecisionConfig {
    /// Significant digits kept by decimal arithmetic (must be >= 1)
    pub digits: u64,
}

impl PrecisionConfig {
    pub fn new(digits: u64) -> Self {
        Self { digits }
    }

    /// Builder method: Set significant digits
    pub fn with_digits(mut self, digits: u64) -> Self {
        self.digits = digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> FigureResult<()> {
        self.context().map(|_| ())
    }

    /// Arithmetic context for one computation.
    pub fn context(&self) -> FigureResult<DecimalContext> {
        DecimalContext::with_digits(self.digits)
    }
}

impl Default for PrecisionConfig {
    fn default() -> Self {
        Self::standard()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl PrecisionConfig {
    /// 100 significant digits
    pub fn standard() -> Self {
        Self::new(DEFAULT_DIGITS)
    }

    /// 200 significant digits
    pub fn extended() -> Self {
        Self::new(2 * DEFAULT_DIGITS)
    }
}
