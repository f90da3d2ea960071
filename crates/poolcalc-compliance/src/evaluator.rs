//! Aggregate compliance evaluation
//!
//! Runs the circuit analyzers, diversifies the load, sizes the supply and
//! assembles the full report. Evaluation never fails.

use poolcalc_core::sizing::{protection_rating, round_dp, temperature_derating};
use poolcalc_core::tables::{
    BONDING_TARGETS, COMMON_PITFALLS, INSTALLATION_GUIDANCE, MAINTENANCE_POINTS,
    RCD_TRIP_CURRENT_MA, SUPPLY_16A_SINGLE_PHASE, SUPPLY_25A_THREE_PHASE, SUPPLY_32A_SINGLE_PHASE,
    SUPPLY_SPECIALIST, TESTING_REQUIREMENTS, TN_DISCONNECTION_TIME_S, TN_EARTHING_NARRATIVE,
    TT_DISCONNECTION_TIME_S, TT_EARTHING_NARRATIVE, ZONES,
};
use poolcalc_core::{
    ComplianceReport, EarthingBonding, InstallationParameters, SafetyFactors, ZoneRequirements,
};

use crate::circuits::{analyze_heater, analyze_lighting, analyze_pump};
use crate::profile::CalculatorProfile;
use crate::rules::{default_rules, evaluate_rules, RegulatoryRule};

/// Evaluator bound to a profile and its rule set
#[derive(Debug, Clone)]
pub struct PoolCalculator {
    profile: CalculatorProfile,
    rules: Vec<RegulatoryRule>,
}

impl PoolCalculator {
    pub fn new(profile: CalculatorProfile) -> Self {
        let rules = default_rules(&profile);
        Self { profile, rules }
    }

    /// Replace the rule set
    pub fn with_rules(mut self, rules: Vec<RegulatoryRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn profile(&self) -> &CalculatorProfile {
        &self.profile
    }

    pub fn rules(&self) -> &[RegulatoryRule] {
        &self.rules
    }

    pub fn evaluate(&self, params: &InstallationParameters) -> ComplianceReport {
        let derating = temperature_derating(params.ambient_temperature);

        let circuits = vec![
            analyze_heater(params, derating, &self.profile),
            analyze_pump(params, derating, &self.profile),
            analyze_lighting(params, derating, &self.profile),
        ];
        for circuit in &circuits {
            tracing::debug!(
                circuit = %circuit.name,
                current = circuit.current,
                cable = %circuit.cable_size,
                protection = circuit.protection_rating,
                status = %circuit.compliance.status,
                "circuit analyzed"
            );
        }

        let diversity = self.profile.diversity_for(params.pool_type);
        let connected_load = params.heater_power + params.pump_power + params.lighting;
        let diversified_load = params.heater_power * diversity.heater
            + params.pump_power * diversity.pump
            + params.lighting * diversity.lighting;

        let total_load = diversified_load.round();
        let total_current = if params.supply_voltage.is_three_phase() {
            diversified_load / (3f64.sqrt() * params.supply_voltage.volts())
        } else {
            diversified_load / params.supply_voltage.volts()
        };

        let supply_requirements = self.supply_requirements(total_load).to_string();
        let main_protection = main_protection(params, total_current);
        let regulatory_compliance = evaluate_rules(params, &self.rules);

        let diversity_factor = if connected_load > 0.0 {
            round_dp(diversified_load / connected_load, 3)
        } else {
            1.0
        };
        let safety_factors = SafetyFactors {
            temperature_derating: derating,
            diversity_factor,
            rcd_trip_current_ma: RCD_TRIP_CURRENT_MA,
            max_disconnection_time_s: if params.earthing_system.is_tt() {
                TT_DISCONNECTION_TIME_S
            } else {
                TN_DISCONNECTION_TIME_S
            },
        };

        tracing::info!(
            pool_type = params.pool_type.as_str(),
            total_load,
            supply = %supply_requirements,
            issues = regulatory_compliance.issues.len(),
            "pool installation evaluated"
        );

        ComplianceReport {
            total_load,
            total_current: round_dp(total_current, 1),
            supply_requirements,
            main_protection,
            earthing_bonding: earthing_bonding(params),
            circuits,
            zones: zone_table(),
            regulatory_compliance,
            safety_factors,
            installation_guidance: to_strings(&INSTALLATION_GUIDANCE),
            testing_requirements: to_strings(&TESTING_REQUIREMENTS),
            maintenance_points: to_strings(&MAINTENANCE_POINTS),
            common_pitfalls: to_strings(&COMMON_PITFALLS),
        }
    }

    fn supply_requirements(&self, total_load: f64) -> &'static str {
        let bands = &self.profile.supply_bands;
        if total_load <= bands.single_phase_16a_max_w {
            SUPPLY_16A_SINGLE_PHASE
        } else if total_load <= bands.single_phase_32a_max_w {
            SUPPLY_32A_SINGLE_PHASE
        } else if total_load <= bands.three_phase_25a_max_w {
            SUPPLY_25A_THREE_PHASE
        } else {
            SUPPLY_SPECIALIST
        }
    }
}

impl Default for PoolCalculator {
    fn default() -> Self {
        Self::new(CalculatorProfile::default())
    }
}

fn main_protection(params: &InstallationParameters, total_current: f64) -> String {
    let rating = protection_rating(total_current);
    if params.supply_voltage.is_three_phase() {
        format!(
            "{}A TP&N main isolator with 30mA RCD protection (RCBOs recommended for each pool circuit)",
            rating
        )
    } else {
        format!(
            "{}A DP main switch with 30mA RCD protection (RCBOs recommended for each pool circuit)",
            rating
        )
    }
}

fn earthing_bonding(params: &InstallationParameters) -> EarthingBonding {
    let narrative = if params.earthing_system.is_tt() {
        TT_EARTHING_NARRATIVE
    } else {
        TN_EARTHING_NARRATIVE
    };

    let private = params.pool_type.is_private();
    let bonding_targets = BONDING_TARGETS
        .iter()
        .filter(|(_, non_private_only)| !(private && *non_private_only))
        .map(|(target, _)| target.to_string())
        .collect();

    EarthingBonding {
        system: params.earthing_system,
        narrative: narrative.to_string(),
        bonding_targets,
    }
}

fn zone_table() -> Vec<ZoneRequirements> {
    ZONES
        .iter()
        .map(|entry| ZoneRequirements {
            zone: entry.zone.to_string(),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            permitted: to_strings(entry.permitted),
            prohibited: to_strings(entry.prohibited),
            min_ip_rating: entry.min_ip_rating,
        })
        .collect()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
