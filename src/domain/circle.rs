// ============================================================================
// Circle
// ============================================================================

use super::base::FigureBase;
use super::config::PrecisionConfig;
use crate::interfaces::Figure;
use crate::numeric::{has_high_precision, Area, FigureError, FigureResult, Param, RawParam, RawParams};
use bigdecimal::BigDecimal;
use std::f64::consts::PI;
use std::str::FromStr;
use std::sync::LazyLock;

/// π to 101 significant digits, used for decimal circle areas.
pub const PI_101_DIGITS: &str = "3.1415926535897932384626433832795028841971693993751058209749445923078164062862089986280348253421170679";

static PI_101: LazyLock<BigDecimal> =
    LazyLock::new(|| BigDecimal::from_str(PI_101_DIGITS).expect("π literal is a valid decimal"));

const RADIUS: &str = "radius";

/// A circle given by its radius.
///
/// # Example
/// ```
/// use area_calc::prelude::*;
///
/// let circle = Circle::new(5).unwrap();
/// let area = circle.area().unwrap();
/// assert!((area.to_f64() - 78.53981633974483).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    base: FigureBase,
    radius: Param,
}

impl Circle {
    /// Create a circle with the default precision.
    ///
    /// # Errors
    /// `TypeMismatch` or `NonPositiveValue` for an invalid radius.
    pub fn new(radius: impl Into<RawParam>) -> FigureResult<Self> {
        Self::with_precision(radius, PrecisionConfig::default())
    }

    pub fn with_precision(
        radius: impl Into<RawParam>,
        precision: PrecisionConfig,
    ) -> FigureResult<Self> {
        Self::from_params_with(RawParams::new().arg(radius), precision)
    }

    /// Create a circle from either one positional value or a value named
    /// `radius`.
    ///
    /// # Errors
    /// Validation errors, then `InvalidShape` for any other parameter layout.
    pub fn from_params(params: RawParams) -> FigureResult<Self> {
        Self::from_params_with(params, PrecisionConfig::default())
    }

    pub fn from_params_with(params: RawParams, precision: PrecisionConfig) -> FigureResult<Self> {
        let base = FigureBase::construct_with(params, precision)?;

        let valid = base.params();
        let radius = match (valid.args(), valid.kwargs()) {
            ([radius], []) => radius.clone(),
            ([], [(name, radius)]) if name == RADIUS => radius.clone(),
            _ => {
                return Err(FigureError::InvalidShape(
                    "Circle must have exactly one radius.",
                ))
            },
        };

        tracing::debug!(%radius, "circle created");
        Ok(Self { base, radius })
    }

    #[inline]
    pub fn radius(&self) -> &Param {
        &self.radius
    }
}

impl Figure for Circle {
    fn name(&self) -> &str {
        "Circle"
    }

    fn base(&self) -> &FigureBase {
        &self.base
    }

    /// `π·r²`.
    ///
    /// In decimal mode π carries 101 significant digits and the product is
    /// rounded to the configured precision.
    fn area(&self) -> FigureResult<Area> {
        if has_high_precision(std::slice::from_ref(&self.radius)) {
            let ctx = self.base.precision().context()?;
            let radius = self.radius.to_decimal()?;
            let squared = &radius * &radius;
            tracing::debug!(digits = ctx.digits(), "circle area in decimal mode");
            return Ok(Area::Decimal(ctx.mul(&PI_101, &squared)));
        }

        let radius = self.radius.to_f64();
        Ok(Area::Float(PI * radius * radius))
    }
}
