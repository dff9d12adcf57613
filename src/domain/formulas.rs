// ============================================================================
// Area Formulas
// Stateless triangle formulas, generic over f64 and BigDecimal
// ============================================================================

use std::ops::{Div, Mul, Sub};

/// Area of a right triangle from its two legs.
///
/// Reads no figure state, so callers pick the numeric type: `f64` with a
/// denominator of `2.0`, or `BigDecimal` with `BigDecimal::from(2)`.
///
/// # Example
/// ```
/// use area_calc::domain::right_triangle_area;
///
/// assert_eq!(right_triangle_area(&[3.0, 4.0], 2.0), 6.0);
/// ```
#[inline]
pub fn right_triangle_area<T>(catheti: &[T; 2], denominator: T) -> T
where
    T: Clone + Mul<Output = T> + Div<Output = T>,
{
    catheti[0].clone() * catheti[1].clone() / denominator
}

/// Squared area of a triangle by Heron's formula: `s(s-a)(s-b)(s-c)`.
///
/// # Example
/// ```
/// use area_calc::domain::squared_herons_area;
///
/// assert_eq!(squared_herons_area(&[3.0, 4.0, 5.0], 6.0), 36.0);
/// ```
#[inline]
pub fn squared_herons_area<T>(sides: &[T; 3], half_perimeter: T) -> T
where
    T: Clone + Mul<Output = T> + Sub<Output = T>,
{
    let [a, b, c] = sides;
    half_perimeter.clone()
        * (half_perimeter.clone() - a.clone())
        * (half_perimeter.clone() - b.clone())
        * (half_perimeter - c.clone())
}
