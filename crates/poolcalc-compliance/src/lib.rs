//! PoolCalc Compliance: Circuit Analysis and Section 702 Evaluation
//!
//! Turns a set of installation parameters into a full compliance report.
//!
//! # Architecture
//!
//! ```text
//! InstallationParameters → Circuit Analyzers → Diversity & Supply → Rules → ComplianceReport
//!                              ↓                     ↓                ↓
//!                      heater/pump/lighting    totalLoad/current   issues/flags
//! ```
//!
//! # Example
//!
//! ```
//! use poolcalc_compliance::{calculate_pool_installation, InstallationParameters};
//!
//! let params = InstallationParameters::default();
//! let report = calculate_pool_installation(&params);
//!
//! println!("Supply: {}", report.supply_requirements);
//! for circuit in &report.circuits {
//!     println!("  {}: {} / {}A", circuit.name, circuit.cable_size, circuit.protection_rating);
//! }
//! ```
//!
//! # Validation
//!
//! ```
//! use poolcalc_compliance::{evaluate_validated, InstallationParameters, PoolCalculator};
//!
//! let params = InstallationParameters { heater_power: -1.0, ..Default::default() };
//! assert!(evaluate_validated(&PoolCalculator::default(), &params).is_err());
//! ```

pub mod circuits;
pub mod evaluator;
pub mod profile;
pub mod rules;
pub mod validation;

pub use poolcalc_core::*;

pub use circuits::{analyze_heater, analyze_lighting, analyze_pump};
pub use evaluator::PoolCalculator;
pub use profile::{CalculatorProfile, SupplyBands};
pub use rules::{default_rules, evaluate_rules, ComplianceFlag, RegulatoryRule, RuleCondition};
pub use validation::{evaluate_validated, validate_parameters, FieldViolation, ValidationReport};

/// Evaluate with the default Section 702 profile
pub fn calculate_pool_installation(params: &InstallationParameters) -> ComplianceReport {
    PoolCalculator::default().evaluate(params)
}
