//! Input validation
//!
//! Optional layer in front of the evaluator. The evaluator itself accepts any
//! numbers; callers that want negative or non-finite inputs rejected go
//! through `evaluate_validated`.

use poolcalc_core::{ComplianceReport, InstallationParameters, PoolCalcError};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::evaluator::PoolCalculator;

/// A rejected numeric field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    /// Offending value; non-finite values serialize as null
    pub value: f64,
    pub reason: String,
}

/// Every violation found, in field order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationReport {
    pub violations: Vec<FieldViolation>,
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn fields(&self) -> Vec<&str> {
        self.violations.iter().map(|v| v.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let parts: Vec<String> = self
            .violations
            .iter()
            .map(|v| format!("{} {}", v.field, v.reason))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl std::error::Error for ValidationReport {}

impl From<ValidationReport> for PoolCalcError {
    fn from(report: ValidationReport) -> Self {
        PoolCalcError::Validation(report.to_string())
    }
}

pub fn validate_parameters(params: &InstallationParameters) -> Result<(), ValidationReport> {
    let fields = [
        ("poolVolume", params.pool_volume),
        ("heaterPower", params.heater_power),
        ("pumpPower", params.pump_power),
        ("lighting", params.lighting),
        ("cableRun", params.cable_run),
    ];

    let mut report = ValidationReport::default();
    for (field, value) in fields {
        if !value.is_finite() {
            report.violations.push(violation(field, value, "must be a finite number"));
        } else if value < 0.0 {
            report.violations.push(violation(field, value, "must not be negative"));
        }
    }

    // Sub-zero ambient is legitimate; only the number itself is checked.
    if !params.ambient_temperature.is_finite() {
        report.violations.push(violation(
            "ambientTemperature",
            params.ambient_temperature,
            "must be a finite number",
        ));
    }

    if report.is_empty() {
        Ok(())
    } else {
        Err(report)
    }
}

fn violation(field: &str, value: f64, reason: &str) -> FieldViolation {
    FieldViolation {
        field: field.to_string(),
        value,
        reason: reason.to_string(),
    }
}

/// Validate, then evaluate
pub fn evaluate_validated(
    calculator: &PoolCalculator,
    params: &InstallationParameters,
) -> Result<ComplianceReport, PoolCalcError> {
    validate_parameters(params)?;
    Ok(calculator.evaluate(params))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters_valid() {
        assert!(validate_parameters(&InstallationParameters::default()).is_ok());
    }

    #[test]
    fn test_collects_every_violation() {
        let params = InstallationParameters {
            heater_power: -3000.0,
            lighting: f64::NAN,
            cable_run: f64::INFINITY,
            ..Default::default()
        };
        let report = validate_parameters(&params).unwrap_err();
        assert_eq!(report.fields(), vec!["heaterPower", "lighting", "cableRun"]);
        assert!(report.to_string().contains("heaterPower must not be negative"));
    }

    #[test]
    fn test_negative_ambient_allowed() {
        let params = InstallationParameters {
            ambient_temperature: -5.0,
            ..Default::default()
        };
        assert!(validate_parameters(&params).is_ok());
    }

    #[test]
    fn test_evaluate_validated_error() {
        let params = InstallationParameters {
            pump_power: -1.0,
            ..Default::default()
        };
        let err = evaluate_validated(&PoolCalculator::default(), &params).unwrap_err();
        assert!(matches!(err, PoolCalcError::Validation(_)));
        assert!(err.to_string().starts_with("VALIDATION/pumpPower"));
    }
}
