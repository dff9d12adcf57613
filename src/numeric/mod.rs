// ============================================================================
// Numeric Module
// Numeric model for dual-precision area computations
// ============================================================================
//
// This module provides:
// - RawParam/RawParams: unvalidated caller inputs
// - Param: validated positive numbers tagged Integer, Float or Decimal
// - Area: computation result (f64 or BigDecimal)
// - DecimalContext: explicit precision context for decimal arithmetic
// - FigureError: error taxonomy shared by validation and figures
//
// Design principles:
// - Precision class is an enum discriminant, never a runtime type probe
// - Decimal precision travels as a value, never as global state
// - All fallible operations return Result (no panics)

mod area;
mod context;
mod errors;
mod param;

pub use area::{is_close, Area, ABS_TOL, REL_TOL};
pub use context::{DecimalContext, DEFAULT_DIGITS};
pub use errors::{FigureError, FigureResult};
pub use param::{has_high_precision, Param, RawParam, RawParams};
