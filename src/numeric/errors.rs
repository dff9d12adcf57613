// ============================================================================
// Figure Errors
// Error taxonomy for parameter validation and area computation
// ============================================================================

use std::fmt;

/// Errors raised while validating figure parameters or computing areas.
///
/// Every variant except `Unimplemented` is raised at construction time, so an
/// invalid figure is never observable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FigureError {
    /// No parameters were supplied at all
    InvalidArgument,
    /// A parameter has an unsupported type, or is a string with non-digit characters
    TypeMismatch,
    /// A parameter is zero, negative or NaN
    NonPositiveValue,
    /// Wrong number (or naming) of parameters for the figure
    InvalidShape(&'static str),
    /// Triangle inequality violated
    DegenerateShape,
    /// `area()` called on a figure that does not provide it
    Unimplemented,
    /// Decimal precision configured below one significant digit
    InvalidPrecision,
}

impl fmt::Display for FigureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FigureError::InvalidArgument => write!(f, "No parameters provided."),
            FigureError::TypeMismatch => write!(
                f,
                "All parameters must be: int, float, Decimal or string where all characters are digits."
            ),
            FigureError::NonPositiveValue => write!(f, "All parameters must be positive."),
            FigureError::InvalidShape(message) => write!(f, "{}", message),
            FigureError::DegenerateShape => write!(
                f,
                "Triangle is not valid: sum of two sides must be greater than third."
            ),
            FigureError::Unimplemented => write!(f, "Figure must implement area()."),
            FigureError::InvalidPrecision => {
                write!(f, "Decimal precision must be at least 1 digit.")
            },
        }
    }
}

impl std::error::Error for FigureError {}

/// Result type alias for figure operations
pub type FigureResult<T> = Result<T, FigureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            FigureError::NonPositiveValue.to_string(),
            "All parameters must be positive."
        );
        assert_eq!(
            FigureError::TypeMismatch.to_string(),
            "All parameters must be: int, float, Decimal or string where all characters are digits."
        );
        assert_eq!(
            FigureError::InvalidShape("Triangle must have 3 sides.").to_string(),
            "Triangle must have 3 sides."
        );
        assert_eq!(
            FigureError::DegenerateShape.to_string(),
            "Triangle is not valid: sum of two sides must be greater than third."
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(FigureError::InvalidArgument, FigureError::InvalidArgument);
        assert_ne!(FigureError::InvalidArgument, FigureError::TypeMismatch);
        assert_ne!(
            FigureError::InvalidShape("a"),
            FigureError::InvalidShape("b")
        );
    }
}
