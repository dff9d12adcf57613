// ============================================================================
// Basic Usage Example
// ============================================================================

use area_calc::prelude::*;
use bigdecimal::BigDecimal;
use std::str::FromStr;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Area Calc Example ===\n");

    // Float precision
    let circle = Circle::new(5).expect("valid radius");
    println!("Circle r=5: {}", circle.area().expect("circle area"));

    let triangle = Triangle::new([3, 4, 5]).expect("valid sides");
    println!(
        "Triangle 3-4-5: {} (right-angled: {})",
        triangle.area().expect("triangle area"),
        triangle.is_right()
    );

    let rectangle = Rectangle::from_params(RawParams::new().arg(3).named("height", 4.5))
        .expect("valid width and height");
    println!("Rectangle 3x4.5: {}", rectangle.area().expect("rectangle area"));

    // Digit-only strings are accepted and computed as floats
    let from_string = Circle::new("2").expect("digit string radius");
    println!("Circle r=\"2\": {}", from_string.area().expect("circle area"));

    // Any decimal input switches to 100-digit decimal arithmetic
    let radius = BigDecimal::from_str("1").expect("decimal literal");
    let precise = Circle::new(radius).expect("valid radius");
    println!("\nCircle r=Decimal(1): {}", precise.area().expect("circle area"));

    let mixed = Triangle::from_sides(BigDecimal::from(2), 3, 4.0).expect("valid sides");
    println!("Triangle 2-3-4 (mixed): {}", mixed.area().expect("triangle area"));

    // Construction errors
    println!("\nErrors:");
    for result in [
        Circle::new(-5).map(|_| ()),
        Circle::new("abc").map(|_| ()),
        Triangle::new([3, 4]).map(|_| ()),
        Triangle::new([1, 2, 10]).map(|_| ()),
    ] {
        if let Err(e) = result {
            println!("  {}", e);
        }
    }

    // The bare base validates but has no area
    let base = FigureBase::construct(RawParams::new().arg(1)).expect("valid params");
    if let Err(e) = base.area() {
        println!("  {}: {}", base.name(), e);
    }

    println!("\n=== Example Complete ===");
}
