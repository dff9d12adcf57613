// ============================================================================
// Parameter Validator
// Normalizes and type-checks raw figure inputs
// ============================================================================

use crate::numeric::{FigureError, FigureResult, Param, RawParam, RawParams};
use smallvec::SmallVec;

/// Validated parameters: positional values and named values, in input order.
///
/// Figures in this crate take at most three values, so positional storage is
/// inline for up to three.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidParams {
    args: SmallVec<[Param; 3]>,
    kwargs: SmallVec<[(String, Param); 1]>,
}

impl ValidParams {
    pub fn args(&self) -> &[Param] {
        &self.args
    }

    pub fn kwargs(&self) -> &[(String, Param)] {
        &self.kwargs
    }

    /// Look up a named value.
    pub fn get(&self, name: &str) -> Option<&Param> {
        self.kwargs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Total number of values, positional and named.
    pub fn len(&self) -> usize {
        self.args.len() + self.kwargs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> impl Iterator<Item = &Param> {
        self.args.iter().chain(self.kwargs.iter().map(|(_, v)| v))
    }

    /// True iff any positional or named value is a decimal.
    pub fn has_high_precision(&self) -> bool {
        self.values().any(Param::is_decimal)
    }

    /// Convert every value to its decimal representation in place.
    pub(crate) fn upgrade_to_decimal(&mut self) -> FigureResult<()> {
        for value in self.args.iter_mut() {
            *value = value.upgrade()?;
        }
        for (_, value) in self.kwargs.iter_mut() {
            *value = value.upgrade()?;
        }
        Ok(())
    }
}

/// Validate positional and named inputs.
///
/// Checks run in order: presence, then type of every value, then sign of
/// every value. Digit-only strings are coerced to `Param::Float`.
///
/// # Errors
/// - `InvalidArgument` if no values were given
/// - `TypeMismatch` for booleans, non-digit strings and infinite floats,
///   including digit strings too long to fit an `f64`
/// - `NonPositiveValue` for zero, negative or NaN values
pub fn validate_params(params: &RawParams) -> FigureResult<ValidParams> {
    if params.is_empty() {
        return Err(FigureError::InvalidArgument);
    }

    let args = params
        .args()
        .iter()
        .map(coerce)
        .collect::<FigureResult<SmallVec<[Param; 3]>>>()?;
    let kwargs = params
        .kwargs()
        .iter()
        .map(|(name, value)| coerce(value).map(|param| (name.clone(), param)))
        .collect::<FigureResult<SmallVec<[(String, Param); 1]>>>()?;

    let valid = ValidParams { args, kwargs };
    if !valid.values().all(Param::is_positive) {
        return Err(FigureError::NonPositiveValue);
    }

    tracing::trace!(
        positional = valid.args.len(),
        named = valid.kwargs.len(),
        "parameters validated"
    );
    Ok(valid)
}

/// Validate positional values only.
pub fn validate_args(args: &[RawParam]) -> FigureResult<ValidParams> {
    validate_params(&RawParams::from(args.to_vec()))
}

fn coerce(value: &RawParam) -> FigureResult<Param> {
    match value {
        RawParam::Integer(v) => Ok(Param::Integer(*v)),
        RawParam::Float(v) if v.is_infinite() => Err(FigureError::TypeMismatch),
        RawParam::Float(v) => Ok(Param::Float(*v)),
        RawParam::Decimal(v) => Ok(Param::Decimal(v.clone())),
        RawParam::Str(s) if is_digit_string(s) => s
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Param::Float)
            .ok_or(FigureError::TypeMismatch),
        RawParam::Str(_) | RawParam::Bool(_) => Err(FigureError::TypeMismatch),
    }
}

fn is_digit_string(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
