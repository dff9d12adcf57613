// ============================================================================
// Validation Module
// Uniform validation of raw figure parameters
// ============================================================================

mod validator;

pub use validator::{validate_args, validate_params, ValidParams};
