//! Regulatory rules
//!
//! Independent checks over the installation parameters. Each rule that fires
//! appends its message to the issue list and may clear one compliance flag.

use poolcalc_core::tables::{BOILERPLATE_RECOMMENDATIONS, POOL_COVER_RECOMMENDATION};
use poolcalc_core::{InstallationMethod, InstallationParameters, PoolType, RegulatoryCompliance};
use serde::{Deserialize, Serialize};

use crate::profile::CalculatorProfile;

/// A single regulatory rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegulatoryRule {
    /// Unique identifier for the rule
    pub id: String,

    /// Message appended to the issue list when the rule fires
    pub message: String,

    pub condition: RuleCondition,

    /// Flag cleared when the rule fires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clears: Option<ComplianceFlag>,

    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl RegulatoryRule {
    pub fn new(id: impl Into<String>, message: impl Into<String>, condition: RuleCondition) -> Self {
        Self {
            id: id.into(),
            message: message.into(),
            condition,
            clears: None,
            enabled: true,
        }
    }

    pub fn clearing(mut self, flag: ComplianceFlag) -> Self {
        self.clears = Some(flag);
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Does the rule fire for these parameters?
    pub fn fires(&self, params: &InstallationParameters) -> bool {
        self.enabled && self.condition.holds(params)
    }
}

/// Condition under which a rule fires
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RuleCondition {
    UnderwaterLightingAbove { max_watts: f64 },
    PoolTypeWithoutEmergencyStop { pool_type: PoolType },
    UndergroundRunAbove { max_length_m: f64 },
    AmbientAbove { max_c: f64 },
}

impl RuleCondition {
    pub fn holds(&self, params: &InstallationParameters) -> bool {
        match self {
            RuleCondition::UnderwaterLightingAbove { max_watts } => {
                params.has_underwater_lighting && params.lighting > *max_watts
            }
            RuleCondition::PoolTypeWithoutEmergencyStop { pool_type } => {
                params.pool_type == *pool_type && !params.has_emergency_stop
            }
            RuleCondition::UndergroundRunAbove { max_length_m } => {
                params.installation_method == InstallationMethod::Underground
                    && params.cable_run > *max_length_m
            }
            RuleCondition::AmbientAbove { max_c } => params.ambient_temperature > *max_c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceFlag {
    Section702,
    RcdProtection,
    EquipotentialBonding,
    SelvLighting,
    CableInstallation,
}

/// The Section 702 rule set for a profile
pub fn default_rules(profile: &CalculatorProfile) -> Vec<RegulatoryRule> {
    vec![
        RegulatoryRule::new(
            "underwater_lighting_load",
            format!(
                "Underwater lighting exceeds {:.0}W: verify SELV transformer rating and split luminaire circuits",
                profile.underwater_lighting_max_watts
            ),
            RuleCondition::UnderwaterLightingAbove {
                max_watts: profile.underwater_lighting_max_watts,
            },
        )
        .clearing(ComplianceFlag::SelvLighting),
        RegulatoryRule::new(
            "public_emergency_stop",
            "Emergency stop is mandatory for public pools: fit emergency stop buttons for pumps and jets",
            RuleCondition::PoolTypeWithoutEmergencyStop {
                pool_type: PoolType::Public,
            },
        )
        .clearing(ComplianceFlag::Section702),
        RegulatoryRule::new(
            "long_underground_run",
            format!(
                "Underground cable run over {:.0}m: use SWA cable at 600mm minimum depth and verify voltage drop",
                profile.long_cable_run_m
            ),
            RuleCondition::UndergroundRunAbove {
                max_length_m: profile.long_cable_run_m,
            },
        )
        .clearing(ComplianceFlag::CableInstallation),
        RegulatoryRule::new(
            "high_ambient_temperature",
            format!(
                "Ambient temperature above {:.0}°C: cable derating applied, ventilate the plant room",
                profile.high_ambient_c
            ),
            RuleCondition::AmbientAbove {
                max_c: profile.high_ambient_c,
            },
        ),
    ]
}

/// Run every rule and build the regulatory summary
pub fn evaluate_rules(params: &InstallationParameters, rules: &[RegulatoryRule]) -> RegulatoryCompliance {
    let mut compliance = RegulatoryCompliance {
        bs7671_section702: true,
        rcd_protection: true,
        equipotential_bonding: true,
        selv_lighting: true,
        cable_installation: true,
        issues: Vec::new(),
        recommendations: Vec::new(),
    };

    for rule in rules.iter().filter(|r| r.fires(params)) {
        compliance.issues.push(rule.message.clone());
        if let Some(flag) = rule.clears {
            clear_flag(&mut compliance, flag);
        }
    }

    compliance
        .recommendations
        .extend(BOILERPLATE_RECOMMENDATIONS.iter().map(|r| r.to_string()));
    if params.has_pool_cover {
        compliance
            .recommendations
            .push(POOL_COVER_RECOMMENDATION.to_string());
    }

    compliance
}

fn clear_flag(compliance: &mut RegulatoryCompliance, flag: ComplianceFlag) {
    match flag {
        ComplianceFlag::Section702 => compliance.bs7671_section702 = false,
        ComplianceFlag::RcdProtection => compliance.rcd_protection = false,
        ComplianceFlag::EquipotentialBonding => compliance.equipotential_bonding = false,
        ComplianceFlag::SelvLighting => compliance.selv_lighting = false,
        ComplianceFlag::CableInstallation => compliance.cable_installation = false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Vec<RegulatoryRule> {
        default_rules(&CalculatorProfile::default())
    }

    #[test]
    fn test_clean_private_pool() {
        let compliance = evaluate_rules(&InstallationParameters::default(), &rules());
        assert!(compliance.is_clean());
        assert_eq!(compliance.recommendations.len(), 3);
    }

    #[test]
    fn test_public_pool_without_emergency_stop() {
        let params = InstallationParameters {
            pool_type: PoolType::Public,
            has_emergency_stop: false,
            ..Default::default()
        };
        let compliance = evaluate_rules(&params, &rules());
        assert!(!compliance.bs7671_section702);
        assert!(compliance.issues.iter().any(|i| i.contains("Emergency stop is mandatory")));

        let with_stop = InstallationParameters {
            has_emergency_stop: true,
            ..params
        };
        assert!(evaluate_rules(&with_stop, &rules()).bs7671_section702);
    }

    #[test]
    fn test_underground_run_needs_both_conditions() {
        let long_surface = InstallationParameters {
            cable_run: 80.0,
            ..Default::default()
        };
        assert!(evaluate_rules(&long_surface, &rules()).issues.is_empty());

        let long_underground = InstallationParameters {
            installation_method: InstallationMethod::Underground,
            ..long_surface
        };
        let compliance = evaluate_rules(&long_underground, &rules());
        assert!(!compliance.cable_installation);
        assert_eq!(compliance.issues.len(), 1);
    }

    #[test]
    fn test_independent_rules_accumulate() {
        let params = InstallationParameters {
            pool_type: PoolType::Public,
            has_underwater_lighting: true,
            lighting: 450.0,
            installation_method: InstallationMethod::Underground,
            cable_run: 75.0,
            ambient_temperature: 35.0,
            ..Default::default()
        };
        let compliance = evaluate_rules(&params, &rules());
        assert_eq!(compliance.issues.len(), 4);
        assert!(!compliance.selv_lighting);
        assert_eq!(compliance.recommendations.len(), 3);
    }

    #[test]
    fn test_disabled_rule_and_pool_cover() {
        let rules: Vec<_> = rules().into_iter().map(RegulatoryRule::disabled).collect();
        let params = InstallationParameters {
            ambient_temperature: 45.0,
            has_pool_cover: true,
            ..Default::default()
        };
        let compliance = evaluate_rules(&params, &rules);
        assert!(compliance.issues.is_empty());
        assert_eq!(compliance.recommendations.len(), 4);
        assert!(compliance.recommendations[3].contains("Pool cover"));
    }
}
