// ============================================================================
// Figure Base
// Shared construction and validation entry point for all figures
// ============================================================================

use super::config::PrecisionConfig;
use crate::interfaces::Figure;
use crate::numeric::{FigureResult, RawParams};
use crate::validation::{validate_params, ValidParams};

/// Validated state shared by every figure.
///
/// Construction validates the raw inputs and derives the precision mode. In
/// high-precision mode every stored value is upgraded to a decimal, so all
/// later arithmetic on this figure stays in decimal.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureBase {
    params: ValidParams,
    high_precision: bool,
    precision: PrecisionConfig,
}

impl FigureBase {
    /// Validate `params` with the default precision (100 digits).
    ///
    /// # Errors
    /// `InvalidArgument`, `TypeMismatch` or `NonPositiveValue` from validation.
    pub fn construct(params: RawParams) -> FigureResult<Self> {
        Self::construct_with(params, PrecisionConfig::default())
    }

    /// Validate `params` and attach a precision configuration.
    ///
    /// # Errors
    /// Validation errors first, then `InvalidPrecision` for a zero-digit config.
    pub fn construct_with(params: RawParams, precision: PrecisionConfig) -> FigureResult<Self> {
        let mut params = validate_params(&params)?;
        precision.validate()?;

        let high_precision = params.has_high_precision();
        if high_precision {
            params.upgrade_to_decimal()?;
        }

        tracing::debug!(
            params = params.len(),
            high_precision,
            digits = precision.digits,
            "figure parameters accepted"
        );

        Ok(Self {
            params,
            high_precision,
            precision,
        })
    }

    #[inline]
    pub fn params(&self) -> &ValidParams {
        &self.params
    }

    #[inline]
    pub fn precision(&self) -> PrecisionConfig {
        self.precision
    }

    #[inline]
    pub fn is_high_precision(&self) -> bool {
        self.high_precision
    }
}

/// The bare base is a figure without an area.
impl Figure for FigureBase {
    fn name(&self) -> &str {
        "FigureBase"
    }

    fn base(&self) -> &FigureBase {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{FigureError, Param};
    use bigdecimal::BigDecimal;

    #[test]
    fn test_construct_rejects_invalid_params() {
        assert_eq!(
            FigureBase::construct(RawParams::new()),
            Err(FigureError::InvalidArgument)
        );
        assert_eq!(
            FigureBase::construct(RawParams::new().arg(-1).arg(2)),
            Err(FigureError::NonPositiveValue)
        );
        assert_eq!(
            FigureBase::construct(RawParams::new().arg(0).arg(2)),
            Err(FigureError::NonPositiveValue)
        );
    }

    #[test]
    fn test_construct_rejects_zero_precision() {
        assert_eq!(
            FigureBase::construct_with(RawParams::new().arg(1), PrecisionConfig::new(0)),
            Err(FigureError::InvalidPrecision)
        );
    }

    #[test]
    fn test_standard_precision_keeps_params() {
        let base = FigureBase::construct(RawParams::new().arg(1).arg(2.5)).unwrap();
        assert!(!base.is_high_precision());
        assert_eq!(base.params().args(), &[Param::Integer(1), Param::Float(2.5)]);
    }

    #[test]
    fn test_high_precision_upgrades_all_params() {
        let base = FigureBase::construct(
            RawParams::new()
                .arg(1)
                .arg(BigDecimal::from(2))
                .named("h", 0.5),
        )
        .unwrap();

        assert!(base.is_high_precision());
        assert!(base.params().values().all(Param::is_decimal));
        assert_eq!(
            base.params().get("h"),
            Some(&Param::Decimal("0.5".parse().unwrap()))
        );
    }

    #[test]
    fn test_base_area_is_unimplemented() {
        let base = FigureBase::construct(RawParams::new().arg(1)).unwrap();
        assert_eq!(base.area(), Err(FigureError::Unimplemented));
        assert_eq!(base.name(), "FigureBase");
    }

    #[test]
    fn test_figure_without_area_override() {
        #[derive(Debug)]
        struct FakeFigure(FigureBase);

        impl Figure for FakeFigure {
            fn name(&self) -> &str {
                "FakeFigure"
            }

            fn base(&self) -> &FigureBase {
                &self.0
            }
        }

        let fake = FakeFigure(FigureBase::construct(RawParams::new().arg(1)).unwrap());
        assert_eq!(fake.area(), Err(FigureError::Unimplemented));
        assert_eq!(
            fake.area().unwrap_err().to_string(),
            "Figure must implement area()."
        );
    }
}
