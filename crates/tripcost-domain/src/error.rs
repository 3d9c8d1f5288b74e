//! Calculation errors

use thiserror::Error;
use tripcost_types::Phase;

/// Validation failure raised before any trip arithmetic runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    #[error("select a vessel first")]
    MissingVessel,

    #[error("{phase} field `{field}` is missing or not a number")]
    InvalidField {
        field: &'static str,
        phase: Phase,
        value: Option<String>,
    },
}

impl CalculationError {
    /// Name of the offending input field, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CalculationError::MissingVessel => None,
            CalculationError::InvalidField { field, .. } => Some(field),
        }
    }

    /// Phase of the offending input field, if any
    pub fn phase(&self) -> Option<Phase> {
        match self {
            CalculationError::MissingVessel => None,
            CalculationError::InvalidField { phase, .. } => Some(*phase),
        }
    }
}

impl From<CalculationError> for tripcost_types::Error {
    fn from(err: CalculationError) -> Self {
        match err {
            CalculationError::MissingVessel => tripcost_types::Error::MissingVessel,
            CalculationError::InvalidField { field, phase, .. } => {
                tripcost_types::Error::InvalidField { field, phase }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_field_display() {
        let err = CalculationError::InvalidField {
            field: "bunkerPrice",
            phase: Phase::Discharging,
            value: Some("abc".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "discharging field `bunkerPrice` is missing or not a number"
        );
        assert_eq!(err.field(), Some("bunkerPrice"));
        assert_eq!(err.phase(), Some(Phase::Discharging));
    }

    #[test]
    fn test_missing_vessel_has_no_field() {
        let err = CalculationError::MissingVessel;
        assert_eq!(err.to_string(), "select a vessel first");
        assert!(err.field().is_none());
    }

    #[test]
    fn test_converts_to_workspace_error_keeping_field_and_phase() {
        let err: tripcost_types::Error = CalculationError::InvalidField {
            field: "dischargeDays",
            phase: Phase::Discharging,
            value: None,
        }
        .into();
        assert!(matches!(
            err,
            tripcost_types::Error::InvalidField {
                field: "dischargeDays",
                phase: Phase::Discharging
            }
        ));

        let err: tripcost_types::Error = CalculationError::MissingVessel.into();
        assert!(matches!(err, tripcost_types::Error::MissingVessel));
    }
}
