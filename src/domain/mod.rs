// ============================================================================
// Domain Models Module
// Figures, their shared base and precision configuration
// ============================================================================

pub mod base;
pub mod circle;
pub mod config;
pub mod formulas;
pub mod rectangle;
pub mod triangle;

pub use base::FigureBase;
pub use circle::{Circle, PI_101_DIGITS};
pub use config::PrecisionConfig;
pub use formulas::{right_triangle_area, squared_herons_area};
pub use rectangle::Rectangle;
pub use triangle::Triangle;
