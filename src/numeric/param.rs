// ============================================================================
// Figure Parameters
// Raw caller inputs and validated numeric parameters
// ============================================================================

use super::errors::{FigureError, FigureResult};
use bigdecimal::num_bigint::BigInt;
use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive, Zero};
use std::cmp::Ordering;
use std::fmt;

// ============================================================================
// Raw Input
// ============================================================================

/// An unvalidated value handed to a figure constructor.
///
/// The variants mirror what a caller may pass: the three numeric kinds, a
/// string that may or may not hold only digits, and a boolean. Booleans are a
/// distinct type and never pass validation.
#[derive(Debug, Clone, PartialEq)]
pub enum RawParam {
    Integer(i64),
    Float(f64),
    Decimal(BigDecimal),
    Str(String),
    Bool(bool),
}

macro_rules! raw_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for RawParam {
                #[inline]
                fn from(value: $t) -> Self {
                    RawParam::Integer(i64::from(value))
                }
            }
        )*
    };
}

raw_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for RawParam {
    #[inline]
    fn from(value: f32) -> Self {
        RawParam::Float(f64::from(value))
    }
}

impl From<f64> for RawParam {
    #[inline]
    fn from(value: f64) -> Self {
        RawParam::Float(value)
    }
}

impl From<BigDecimal> for RawParam {
    #[inline]
    fn from(value: BigDecimal) -> Self {
        RawParam::Decimal(value)
    }
}

impl From<&BigDecimal> for RawParam {
    #[inline]
    fn from(value: &BigDecimal) -> Self {
        RawParam::Decimal(value.clone())
    }
}

/// `rust_decimal::Decimal` is treated as an arbitrary-precision input.
/// The conversion is exact: mantissa and scale carry over unchanged.
impl From<rust_decimal::Decimal> for RawParam {
    fn from(value: rust_decimal::Decimal) -> Self {
        RawParam::Decimal(BigDecimal::new(
            BigInt::from(value.mantissa()),
            i64::from(value.scale()),
        ))
    }
}

impl From<&str> for RawParam {
    #[inline]
    fn from(value: &str) -> Self {
        RawParam::Str(value.to_string())
    }
}

impl From<String> for RawParam {
    #[inline]
    fn from(value: String) -> Self {
        RawParam::Str(value)
    }
}

impl From<bool> for RawParam {
    #[inline]
    fn from(value: bool) -> Self {
        RawParam::Bool(value)
    }
}

/// Positional and named raw inputs, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawParams {
    pub(crate) args: Vec<RawParam>,
    pub(crate) kwargs: Vec<(String, RawParam)>,
}

impl RawParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: append a positional value
    pub fn arg(mut self, value: impl Into<RawParam>) -> Self {
        self.args.push(value.into());
        self
    }

    /// Builder method: append a named value
    pub fn named(mut self, name: impl Into<String>, value: impl Into<RawParam>) -> Self {
        self.kwargs.push((name.into(), value.into()));
        self
    }

    pub fn args(&self) -> &[RawParam] {
        &self.args
    }

    pub fn kwargs(&self) -> &[(String, RawParam)] {
        &self.kwargs
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty() && self.kwargs.is_empty()
    }

    /// All values, positional first, then named.
    pub fn values(&self) -> impl Iterator<Item = &RawParam> {
        self.args.iter().chain(self.kwargs.iter().map(|(_, v)| v))
    }
}

impl<T: Into<RawParam>> FromIterator<T> for RawParams {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            args: iter.into_iter().map(Into::into).collect(),
            kwargs: Vec::new(),
        }
    }
}

impl From<Vec<RawParam>> for RawParams {
    fn from(args: Vec<RawParam>) -> Self {
        Self {
            args,
            kwargs: Vec::new(),
        }
    }
}

// ============================================================================
// Validated Parameter
// ============================================================================

/// A validated, strictly positive numeric parameter.
///
/// The discriminant is the precision class: any `Decimal` among a figure's
/// parameters switches the whole computation to decimal arithmetic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Param {
    Integer(i64),
    Float(f64),
    Decimal(BigDecimal),
}

impl Param {
    #[inline]
    pub fn is_decimal(&self) -> bool {
        matches!(self, Param::Decimal(_))
    }

    /// Strictly greater than zero. NaN is not positive.
    pub fn is_positive(&self) -> bool {
        match self {
            Param::Integer(v) => *v > 0,
            Param::Float(v) => *v > 0.0,
            Param::Decimal(v) => *v > BigDecimal::zero(),
        }
    }

    /// Value as `f64`. Decimals outside the `f64` range saturate to infinity.
    pub fn to_f64(&self) -> f64 {
        match self {
            Param::Integer(v) => *v as f64,
            Param::Float(v) => *v,
            Param::Decimal(v) => v.to_f64().unwrap_or(f64::INFINITY),
        }
    }

    /// Exact decimal value of this parameter.
    ///
    /// # Errors
    /// Returns `TypeMismatch` for a non-finite float.
    pub fn to_decimal(&self) -> FigureResult<BigDecimal> {
        match self {
            Param::Integer(v) => Ok(BigDecimal::from(*v)),
            Param::Float(v) => BigDecimal::from_f64(*v).ok_or(FigureError::TypeMismatch),
            Param::Decimal(v) => Ok(v.clone()),
        }
    }

    /// Same value in the decimal representation.
    pub fn upgrade(&self) -> FigureResult<Param> {
        self.to_decimal().map(Param::Decimal)
    }

    /// Compare by numeric value across precision classes.
    ///
    /// Validated parameters are never NaN, so the fallback to `Equal` only
    /// applies to values that never reach a figure.
    pub fn cmp_value(&self, other: &Param) -> Ordering {
        match (self, other) {
            (Param::Integer(a), Param::Integer(b)) => a.cmp(b),
            (Param::Decimal(a), Param::Decimal(b)) => a.cmp(b),
            (Param::Decimal(_), _) | (_, Param::Decimal(_)) => {
                match (self.to_decimal(), other.to_decimal()) {
                    (Ok(a), Ok(b)) => a.cmp(&b),
                    _ => self
                        .to_f64()
                        .partial_cmp(&other.to_f64())
                        .unwrap_or(Ordering::Equal),
                }
            },
            _ => self
                .to_f64()
                .partial_cmp(&other.to_f64())
                .unwrap_or(Ordering::Equal),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Integer(v) => write!(f, "{}", v),
            Param::Float(v) => write!(f, "{}", v),
            Param::Decimal(v) => write!(f, "{}", v),
        }
    }
}

/// True iff at least one parameter is an arbitrary-precision decimal.
#[inline]
pub fn has_high_precision(params: &[Param]) -> bool {
    params.iter().any(Param::is_decimal)
}
