// ============================================================================
// Area Calculation Library
// Dual-precision areas of circles, rectangles and triangles
// ============================================================================

//! # Area Calc
//!
//! Areas of simple geometric figures from heterogeneous numeric inputs.
//!
//! ## Features
//!
//! - **Uniform validation** of integers, floats, decimals and digit-only strings
//! - **Dual precision**: `f64` for ordinary inputs, 100-digit decimals as soon
//!   as any input is a decimal
//! - **Circle** (`π·r²`), **Rectangle** (`w·h`) and **Triangle** (Heron's
//!   formula with a right-triangle shortcut)
//! - **Explicit precision context**: no global decimal state
//!
//! ## Example
//!
//! ```rust
//! use area_calc::prelude::*;
//! use bigdecimal::BigDecimal;
//!
//! let circle = Circle::new(5).unwrap();
//! println!("Circle area: {}", circle.area().unwrap());
//!
//! let triangle = Triangle::new([3, 4, 5]).unwrap();
//! assert!(triangle.is_right());
//! assert_eq!(triangle.area().unwrap(), Area::Float(6.0));
//!
//! // One decimal side switches the whole computation to decimal arithmetic
//! let precise = Triangle::from_sides(BigDecimal::from(2), 3, 4).unwrap();
//! assert!(precise.area().unwrap().is_decimal());
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod validation;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        right_triangle_area, squared_herons_area, Circle, FigureBase, PrecisionConfig, Rectangle,
        Triangle,
    };
    pub use crate::interfaces::Figure;
    pub use crate::numeric::{
        has_high_precision, Area, DecimalContext, FigureError, FigureResult, Param, RawParam,
        RawParams,
    };
    pub use crate::validation::{validate_args, validate_params, ValidParams};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use crate::numeric::REL_TOL;
    use bigdecimal::BigDecimal;
    use proptest::prelude::*;
    use std::f64::consts::PI;
    use std::str::FromStr;

    #[test]
    fn test_end_to_end_areas() {
        let figures: Vec<(Box<dyn Figure>, f64)> = vec![
            (Box::new(Circle::new(5).unwrap()) as Box<dyn Figure>, 78.53981633974483),
            (Box::new(Triangle::new([3, 4, 5]).unwrap()) as Box<dyn Figure>, 6.0),
            (Box::new(Rectangle::new(3, 4.5).unwrap()) as Box<dyn Figure>, 13.5),
            (
                Box::new(Triangle::new([0.0001, 0.0001, 0.0001]).unwrap()) as Box<dyn Figure>,
                4.330127018922195e-09,
            ),
        ];

        for (figure, expected) in figures {
            let area = figure.area().unwrap();
            assert!(
                area.approx_eq(&Area::Float(expected), REL_TOL),
                "{} area {} != {}",
                figure.name(),
                area,
                expected
            );
        }
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(Circle::new(-5).unwrap_err(), FigureError::NonPositiveValue);
        assert_eq!(Circle::new(0).unwrap_err(), FigureError::NonPositiveValue);
        assert_eq!(Circle::new("abc").unwrap_err(), FigureError::TypeMismatch);
        assert_eq!(
            Triangle::new([3, 4]).unwrap_err().to_string(),
            "Triangle must have 3 sides."
        );
        assert_eq!(
            Triangle::new([1, 2, 10]).unwrap_err(),
            FigureError::DegenerateShape
        );
    }

    #[test]
    fn test_mixed_precision_triangle_yields_decimal() {
        let triangle = Triangle::from_sides(BigDecimal::from_str("2.5").unwrap(), 3, 4.0).unwrap();
        let area = triangle.area().unwrap();

        assert!(area.is_decimal());
        let float = Triangle::new([2.5, 3.0, 4.0]).unwrap().area().unwrap();
        assert!(area.approx_eq(&float, 1e-12));
    }

    #[test]
    fn test_figures_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Circle>();
        assert_send_sync::<Rectangle>();
        assert_send_sync::<Triangle>();
        assert_send_sync::<Box<dyn Figure>>();
    }

    fn valid_sides() -> impl Strategy<Value = [f64; 3]> {
        (1.0f64..100.0, 1.0f64..100.0, 0.05f64..0.95).prop_map(|(a, b, t)| {
            let low = (a - b).abs();
            let high = a + b;
            [a, b, low + t * (high - low)]
        })
    }

    fn mixed_class_triangle() -> impl Strategy<Value = Vec<RawParam>> {
        (1i64..1000, 1i64..1000)
            .prop_flat_map(|(a, b)| {
                let sides = ((a - b).abs() + 1..a + b).prop_map(move |c| [a, b, c]);
                (sides, prop::array::uniform3(0u8..3))
            })
            .prop_map(|(sides, classes)| {
                sides
                    .into_iter()
                    .zip(classes)
                    .map(|(side, class)| match class {
                        0 => RawParam::from(side),
                        1 => RawParam::from(side as f64),
                        _ => RawParam::from(BigDecimal::from(side)),
                    })
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn prop_circle_area_matches_pi_r_squared(r in 1e-3f64..1e6) {
            let area = Circle::new(r).unwrap().area().unwrap();
            prop_assert!(area.approx_eq(&Area::Float(PI * r * r), REL_TOL));
        }

        #[test]
        fn prop_triangle_area_is_permutation_invariant(sides in valid_sides()) {
            let [a, b, c] = sides;
            let reference = Triangle::new([a, b, c]).unwrap().area().unwrap();
            prop_assert!(reference.to_f64() > 0.0);

            for permutation in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
                let area = Triangle::new(permutation).unwrap().area().unwrap();
                prop_assert!(area.approx_eq(&reference, REL_TOL));
            }
        }

        #[test]
        fn prop_mixed_class_area_is_permutation_invariant(sides in mixed_class_triangle()) {
            let reference = Triangle::new(sides.clone()).unwrap();
            let expected = reference.area().unwrap();
            let sorted = reference.sides().each_ref().map(Param::to_f64);

            for order in [[0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]] {
                let triangle = Triangle::new(order.map(|i| sides[i].clone())).unwrap();
                prop_assert_eq!(triangle.sides().each_ref().map(Param::to_f64), sorted);
                prop_assert_eq!(triangle.is_right(), reference.is_right());

                let area = triangle.area().unwrap();
                prop_assert_eq!(area.is_decimal(), expected.is_decimal());
                prop_assert!(area.approx_eq(&expected, REL_TOL), "{} != {}", area, expected);
            }
        }

        #[test]
        fn prop_triangle_area_matches_heron(sides in valid_sides()) {
            let triangle = Triangle::new(sides).unwrap();
            let [a, b, c] = sides;
            let s = (a + b + c) / 2.0;
            let heron = (s * (s - a) * (s - b) * (s - c)).sqrt();
            let area = triangle.area().unwrap();
            prop_assert!(area.approx_eq(&Area::Float(heron), 1e-6));
        }

        #[test]
        fn prop_area_is_idempotent(sides in valid_sides()) {
            let triangle = Triangle::new(sides).unwrap();
            prop_assert_eq!(triangle.area().unwrap(), triangle.area().unwrap());
        }
    }
}
