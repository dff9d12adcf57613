// ============================================================================
// Triangle
// Heron's formula with a right-triangle shortcut, in f64 or decimal
// ============================================================================

use super::base::FigureBase;
use super::config::PrecisionConfig;
use super::formulas::{right_triangle_area, squared_herons_area};
use crate::interfaces::Figure;
use crate::numeric::{
    has_high_precision, is_close, Area, FigureError, FigureResult, Param, RawParam, RawParams,
    ABS_TOL, REL_TOL,
};
use bigdecimal::BigDecimal;
use num_traits::ToPrimitive;

/// A triangle given by its three side lengths.
///
/// Sides are stored sorted ascending, so `sides()[2]` is the longest and the
/// first two are the legs when the triangle is right-angled.
///
/// # Example
/// ```
/// use area_calc::prelude::*;
///
/// let triangle = Triangle::new([5, 3, 4]).unwrap();
/// assert!(triangle.is_right());
/// assert_eq!(triangle.area().unwrap(), Area::Float(6.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    base: FigureBase,
    sides: [Param; 3],
}

impl Triangle {
    /// Create a triangle with the default precision.
    ///
    /// # Errors
    /// - Validation errors (`InvalidArgument`, `TypeMismatch`, `NonPositiveValue`)
    /// - `InvalidShape` unless exactly three sides are given
    /// - `DegenerateShape` if the two shorter sides do not exceed the longest
    pub fn new<I>(sides: I) -> FigureResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<RawParam>,
    {
        Self::with_precision(sides, PrecisionConfig::default())
    }

    pub fn with_precision<I>(sides: I, precision: PrecisionConfig) -> FigureResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<RawParam>,
    {
        Self::from_params_with(sides.into_iter().collect(), precision)
    }

    /// Create a triangle from three sides of possibly different types.
    pub fn from_sides(
        a: impl Into<RawParam>,
        b: impl Into<RawParam>,
        c: impl Into<RawParam>,
    ) -> FigureResult<Self> {
        Self::from_params(RawParams::new().arg(a).arg(b).arg(c))
    }

    pub fn from_params(params: RawParams) -> FigureResult<Self> {
        Self::from_params_with(params, PrecisionConfig::default())
    }

    pub fn from_params_with(params: RawParams, precision: PrecisionConfig) -> FigureResult<Self> {
        let base = FigureBase::construct_with(params, precision)?;

        let valid = base.params();
        let mut sides: [Param; 3] = match (valid.args(), valid.kwargs()) {
            ([a, b, c], []) => [a.clone(), b.clone(), c.clone()],
            _ => return Err(FigureError::InvalidShape("Triangle must have 3 sides.")),
        };

        sides.sort_by(Param::cmp_value);
        if !two_shorter_exceed_longest(&sides)? {
            return Err(FigureError::DegenerateShape);
        }

        tracing::debug!(
            a = %sides[0],
            b = %sides[1],
            c = %sides[2],
            "triangle created"
        );
        Ok(Self { base, sides })
    }

    /// Sides in ascending order.
    #[inline]
    pub fn sides(&self) -> &[Param; 3] {
        &self.sides
    }

    /// Pythagorean check `a² + b² ≈ c²`.
    ///
    /// Evaluated in `f64` with a relative tolerance of `1e-9`, also for
    /// decimal sides: this only classifies the triangle. The legs are first
    /// scaled by the hypotenuse, so sides far outside the `f64` range still
    /// classify correctly.
    pub fn is_right(&self) -> bool {
        let [a, b, c] = &self.sides;
        let (x, y) = (ratio(a, c), ratio(b, c));
        is_close(x * x + y * y, 1.0, REL_TOL, ABS_TOL)
    }

    fn decimal_area(&self, is_right: bool) -> FigureResult<Area> {
        let ctx = self.base.precision().context()?;
        let [a, b, c] = &self.sides;
        let sides = [a.to_decimal()?, b.to_decimal()?, c.to_decimal()?];

        if is_right {
            let [a, b, _] = &sides;
            let area = right_triangle_area(&[a.clone(), b.clone()], BigDecimal::from(2));
            return Ok(Area::Decimal(ctx.round(&area)));
        }

        // Kept exact: rounding `s` could push `s - c` below zero
        let perimeter = &sides[0] + &sides[1] + &sides[2];
        let half_perimeter = perimeter * BigDecimal::new(5.into(), 1);
        let squared = ctx.round(&squared_herons_area(&sides, half_perimeter));
        ctx.sqrt(&squared)
            .map(Area::Decimal)
            .ok_or(FigureError::DegenerateShape)
    }

    fn float_area(&self, is_right: bool) -> Area {
        let sides = self.sides.each_ref().map(Param::to_f64);

        if is_right {
            return Area::Float(right_triangle_area(&[sides[0], sides[1]], 2.0));
        }

        let half_perimeter = sides.iter().sum::<f64>() / 2.0;
        Area::Float(squared_herons_area(&sides, half_perimeter).sqrt())
    }
}

impl Figure for Triangle {
    fn name(&self) -> &str {
        "Triangle"
    }

    fn base(&self) -> &FigureBase {
        &self.base
    }

    /// Right triangles use `legs / 2`, all others Heron's formula.
    ///
    /// Decimal mode evaluates the formulas exactly, rounds the result to the
    /// configured precision and returns `Area::Decimal`.
    fn area(&self) -> FigureResult<Area> {
        let is_right = self.is_right();
        let high_precision = has_high_precision(&self.sides);

        tracing::debug!(is_right, high_precision, "triangle area");
        if high_precision {
            self.decimal_area(is_right)
        } else {
            Ok(self.float_area(is_right))
        }
    }
}

/// `lhs / rhs` as `f64`, divided in decimal when both sides are decimals.
fn ratio(lhs: &Param, rhs: &Param) -> f64 {
    match (lhs, rhs) {
        (Param::Decimal(x), Param::Decimal(y)) => (x / y).to_f64().unwrap_or(f64::NAN),
        _ => lhs.to_f64() / rhs.to_f64(),
    }
}

/// Strict triangle inequality on sorted sides.
///
/// Exact for all-integer and decimal sides, `f64` otherwise.
fn two_shorter_exceed_longest(sides: &[Param; 3]) -> FigureResult<bool> {
    match sides {
        [Param::Integer(a), Param::Integer(b), Param::Integer(c)] => {
            Ok(i128::from(*a) + i128::from(*b) > i128::from(*c))
        },
        _ if has_high_precision(sides) => {
            let [a, b, c] = sides;
            Ok(a.to_decimal()? + b.to_decimal()? > c.to_decimal()?)
        },
        [a, b, c] => Ok(a.to_f64() + b.to_f64() > c.to_f64()),
    }
}
