// ============================================================================
// Area
// Result of an area computation, in the precision class of its inputs
// ============================================================================

use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive};
use std::fmt;

/// Default relative tolerance for floating-point closeness checks.
pub const REL_TOL: f64 = 1e-9;

/// Default absolute tolerance for floating-point closeness checks.
pub const ABS_TOL: f64 = 0.0;

/// `|a - b| <= max(rel_tol * max(|a|, |b|), abs_tol)`.
///
/// Exactly equal values (including equal infinities) are always close.
pub fn is_close(a: f64, b: f64, rel_tol: f64, abs_tol: f64) -> bool {
    if a == b {
        return true;
    }
    if a.is_infinite() || b.is_infinite() {
        return false;
    }
    let diff = (a - b).abs();
    diff <= (rel_tol * a.abs().max(b.abs())).max(abs_tol)
}

/// Area of a figure.
///
/// `Float` for integer and float inputs, `Decimal` whenever any input was an
/// arbitrary-precision decimal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Area {
    Float(f64),
    Decimal(BigDecimal),
}

impl Area {
    #[inline]
    pub fn is_decimal(&self) -> bool {
        matches!(self, Area::Decimal(_))
    }

    /// Value as `f64` (lossy for decimals).
    pub fn to_f64(&self) -> f64 {
        match self {
            Area::Float(v) => *v,
            Area::Decimal(v) => v.to_f64().unwrap_or(f64::INFINITY),
        }
    }

    pub fn as_decimal(&self) -> Option<&BigDecimal> {
        match self {
            Area::Decimal(v) => Some(v),
            Area::Float(_) => None,
        }
    }

    pub fn into_decimal(self) -> Option<BigDecimal> {
        match self {
            Area::Decimal(v) => Some(v),
            Area::Float(_) => None,
        }
    }

    /// Relative closeness.
    ///
    /// Two decimals are compared in decimal arithmetic, so tolerances far
    /// below `f64::EPSILON` are meaningful. Any other pairing goes through
    /// `f64`.
    pub fn approx_eq(&self, other: &Area, rel_tol: f64) -> bool {
        match (self, other) {
            (Area::Decimal(a), Area::Decimal(b)) => match BigDecimal::from_f64(rel_tol) {
                Some(tol) => {
                    let diff = (a - b).abs();
                    let scale = a.abs().max(b.abs());
                    diff <= scale * tol
                },
                None => is_close(self.to_f64(), other.to_f64(), rel_tol, ABS_TOL),
            },
            _ => is_close(self.to_f64(), other.to_f64(), rel_tol, ABS_TOL),
        }
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Area::Float(v) => write!(f, "{}", v),
            Area::Decimal(v) => write!(f, "{}", v),
        }
    }
}
