// ============================================================================
// Figure Interface
// Defines the contract shared by every geometric figure
// ============================================================================

use crate::domain::{FigureBase, PrecisionConfig};
use crate::numeric::{Area, FigureError, FigureResult};
use crate::validation::ValidParams;

/// Contract for figures whose area can be computed.
///
/// Implementations construct through [`FigureBase`], which validates and
/// stores the parameters, then add their own shape invariants.
pub trait Figure: Send + Sync + std::fmt::Debug {
    /// The figure name for logging
    fn name(&self) -> &str;

    /// Shared validated state
    fn base(&self) -> &FigureBase;

    /// Validated parameters, upgraded to decimals in high-precision mode
    fn params(&self) -> &ValidParams {
        self.base().params()
    }

    fn precision(&self) -> PrecisionConfig {
        self.base().precision()
    }

    /// Whether area computations run in decimal arithmetic
    fn is_high_precision(&self) -> bool {
        self.base().is_high_precision()
    }

    /// Area of the figure.
    ///
    /// Every concrete figure overrides this. The default fails with
    /// `Unimplemented`.
    fn area(&self) -> FigureResult<Area> {
        Err(FigureError::Unimplemented)
    }
}
