// ============================================================================
// Rectangle
// ============================================================================

use super::base::FigureBase;
use super::config::PrecisionConfig;
use crate::interfaces::Figure;
use crate::numeric::{Area, FigureError, FigureResult, Param, RawParam, RawParams};

const WIDTH: &str = "width";
const HEIGHT: &str = "height";

const LAYOUT: FigureError = FigureError::InvalidShape("Rectangle must have a width and a height.");

/// A rectangle given by its width and height.
///
/// # Example
/// ```
/// use area_calc::prelude::*;
///
/// let rectangle = Rectangle::new(3, 4.5).unwrap();
/// assert_eq!(rectangle.area().unwrap(), Area::Float(13.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    base: FigureBase,
    width: Param,
    height: Param,
}

impl Rectangle {
    pub fn new(width: impl Into<RawParam>, height: impl Into<RawParam>) -> FigureResult<Self> {
        Self::with_precision(width, height, PrecisionConfig::default())
    }

    pub fn with_precision(
        width: impl Into<RawParam>,
        height: impl Into<RawParam>,
        precision: PrecisionConfig,
    ) -> FigureResult<Self> {
        Self::from_params_with(RawParams::new().arg(width).arg(height), precision)
    }

    /// Create a rectangle from two values: positional `(width, height)`,
    /// positional width with a named `height`, or both named.
    ///
    /// # Errors
    /// Validation errors, then `InvalidShape` for any other parameter layout.
    pub fn from_params(params: RawParams) -> FigureResult<Self> {
        Self::from_params_with(params, PrecisionConfig::default())
    }

    pub fn from_params_with(params: RawParams, precision: PrecisionConfig) -> FigureResult<Self> {
        let base = FigureBase::construct_with(params, precision)?;

        let valid = base.params();
        let (width, height) = match (valid.args(), valid.kwargs()) {
            ([width, height], []) => (width, height),
            ([width], [(name, height)]) if name == HEIGHT => (width, height),
            ([], [(first, a), (second, b)]) => match (first.as_str(), second.as_str()) {
                (WIDTH, HEIGHT) => (a, b),
                (HEIGHT, WIDTH) => (b, a),
                _ => return Err(LAYOUT),
            },
            _ => return Err(LAYOUT),
        };
        let (width, height) = (width.clone(), height.clone());

        tracing::debug!(%width, %height, "rectangle created");
        Ok(Self {
            base,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> &Param {
        &self.width
    }

    #[inline]
    pub fn height(&self) -> &Param {
        &self.height
    }
}

impl Figure for Rectangle {
    fn name(&self) -> &str {
        "Rectangle"
    }

    fn base(&self) -> &FigureBase {
        &self.base
    }

    /// `width·height`, rounded to the configured precision in decimal mode.
    fn area(&self) -> FigureResult<Area> {
        if self.width.is_decimal() || self.height.is_decimal() {
            let ctx = self.base.precision().context()?;
            let (width, height) = (self.width.to_decimal()?, self.height.to_decimal()?);
            return Ok(Area::Decimal(ctx.mul(&width, &height)));
        }

        Ok(Area::Float(self.width.to_f64() * self.height.to_f64()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn test_area_float() {
        assert_eq!(Rectangle::new(3, 4).unwrap().area().unwrap(), Area::Float(12.0));
        assert_eq!(
            Rectangle::new(2.5, "2").unwrap().area().unwrap(),
            Area::Float(5.0)
        );
    }

    #[test]
    fn test_named_layouts() {
        let layouts = [
            RawParams::new().named("width", 3).named("height", 4),
            RawParams::new().named("height", 4).named("width", 3),
            RawParams::new().arg(3).named("height", 4),
        ];
        for params in layouts {
            let rectangle = Rectangle::from_params(params).unwrap();
            assert_eq!(rectangle.width(), &Param::Integer(3));
            assert_eq!(rectangle.height(), &Param::Integer(4));
        }
    }

    #[test]
    fn test_invalid_layouts() {
        let expected = Err(FigureError::InvalidShape(
            "Rectangle must have a width and a height.",
        ));
        assert_eq!(Rectangle::from_params(RawParams::new().arg(3)), expected);
        assert_eq!(
            Rectangle::from_params(RawParams::new().arg(3).arg(4).arg(5)),
            expected
        );
        assert_eq!(
            Rectangle::from_params(RawParams::new().arg(3).named("width", 4)),
            expected
        );
        assert_eq!(
            Rectangle::from_params(RawParams::new().named("width", 3).named("depth", 4)),
            expected
        );
        assert_eq!(
            Rectangle::from_params(RawParams::new().named("width", 3).named("width", 4)),
            expected
        );
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(Rectangle::new(0, 4), Err(FigureError::NonPositiveValue));
        assert_eq!(Rectangle::new(3, -4.0), Err(FigureError::NonPositiveValue));
        assert_eq!(Rectangle::new("wide", 4), Err(FigureError::TypeMismatch));
        assert_eq!(
            Rectangle::from_params(RawParams::new()),
            Err(FigureError::InvalidArgument)
        );
    }

    #[test]
    fn test_area_decimal() {
        let rectangle = Rectangle::new(dec("0.1"), 0.5).unwrap();
        assert!(rectangle.is_high_precision());
        assert_eq!(
            rectangle.area().unwrap(),
            Area::Decimal(dec("0.05"))
        );
    }

    #[test]
    fn test_area_decimal_is_rounded() {
        let third = dec("0.3333333333");
        let rectangle =
            Rectangle::with_precision(third.clone(), third, PrecisionConfig::new(5)).unwrap();
        assert_eq!(rectangle.area().unwrap(), Area::Decimal(dec("0.11111")));
    }
}
