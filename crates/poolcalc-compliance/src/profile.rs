//! Calculator profiles
//!
//! Thresholds and factors used by the evaluator. The default profile carries
//! the fixed BS 7671 Section 702 constants; YAML files may override any field.

use poolcalc_core::tables::{NON_PRIVATE_DIVERSITY, PRIVATE_DIVERSITY};
use poolcalc_core::{DiversityFactors, PoolCalcError, PoolType};
use serde::{Deserialize, Serialize};

/// Profile defining thresholds and factors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorProfile {
    /// Profile name (e.g., "bs7671-702@2022")
    pub name: String,

    // === Diversity ===

    pub private_diversity: DiversityFactors,

    /// Applied to public and commercial pools
    pub non_private_diversity: DiversityFactors,

    // === Regulatory thresholds ===

    /// Underwater lighting load above which an issue is raised (W)
    pub underwater_lighting_max_watts: f64,

    /// Cable run above which an underground route is flagged (m)
    pub long_cable_run_m: f64,

    /// Ambient temperature above which a derating issue is raised (°C)
    pub high_ambient_c: f64,

    // === Voltage drop ===

    pub lighting_voltage_drop_percent: f64,

    pub power_voltage_drop_percent: f64,

    // === Supply bands ===

    pub supply_bands: SupplyBands,
}

/// Upper load bounds (W) for each supply recommendation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SupplyBands {
    pub single_phase_16a_max_w: f64,
    pub single_phase_32a_max_w: f64,
    pub three_phase_25a_max_w: f64,
}

impl Default for SupplyBands {
    fn default() -> Self {
        Self {
            single_phase_16a_max_w: 3000.0,
            single_phase_32a_max_w: 7000.0,
            three_phase_25a_max_w: 15000.0,
        }
    }
}

impl CalculatorProfile {
    /// The fixed Section 702 constants
    pub fn bs7671() -> Self {
        Self {
            name: "bs7671-702@2022".to_string(),
            private_diversity: PRIVATE_DIVERSITY,
            non_private_diversity: NON_PRIVATE_DIVERSITY,
            underwater_lighting_max_watts: 300.0,
            long_cable_run_m: 50.0,
            high_ambient_c: 30.0,
            lighting_voltage_drop_percent: 3.0,
            power_voltage_drop_percent: 5.0,
            supply_bands: SupplyBands::default(),
        }
    }

    /// Load profile from YAML. Missing fields keep their default values.
    pub fn from_yaml(yaml: &str) -> Result<Self, PoolCalcError> {
        serde_yaml::from_str(yaml).map_err(|e| PoolCalcError::Profile(e.to_string()))
    }

    /// Load profile from a YAML file
    pub fn load(path: &str) -> Result<Self, PoolCalcError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PoolCalcError::Profile(format!("failed to read {}: {}", path, e)))?;
        Self::from_yaml(&content)
    }

    pub fn diversity_for(&self, pool_type: PoolType) -> DiversityFactors {
        if pool_type.is_private() {
            self.private_diversity
        } else {
            self.non_private_diversity
        }
    }
}

impl Default for CalculatorProfile {
    fn default() -> Self {
        Self::bs7671()
    }
}
