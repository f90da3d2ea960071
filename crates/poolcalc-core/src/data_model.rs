//! Data Model: InstallationParameters, CircuitResult, ComplianceReport
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PoolCalcError;
use crate::verdict::CircuitCompliance;

/// Installation class of the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PoolType {
    /// Domestic pool serving a single household
    #[default]
    Private,
    /// Pool open to the public (leisure centre, school)
    Public,
    /// Hotel, club or other commercially operated pool
    Commercial,
}

impl PoolType {
    pub fn is_private(&self) -> bool {
        matches!(self, PoolType::Private)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PoolType::Private => "private",
            PoolType::Public => "public",
            PoolType::Commercial => "commercial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FiltrationType {
    #[default]
    Sand,
    Cartridge,
    /// Diatomaceous earth
    De,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum HeatingType {
    #[default]
    Electric,
    HeatPump,
    Gas,
}

/// Supply earthing arrangement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum EarthingSystem {
    #[serde(rename = "TT")]
    Tt,
    #[serde(rename = "TN-S")]
    TnS,
    #[default]
    #[serde(rename = "TN-C-S")]
    TnCS,
}

impl EarthingSystem {
    pub fn is_tt(&self) -> bool {
        matches!(self, EarthingSystem::Tt)
    }
}

impl fmt::Display for EarthingSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EarthingSystem::Tt => write!(f, "TT"),
            EarthingSystem::TnS => write!(f, "TN-S"),
            EarthingSystem::TnCS => write!(f, "TN-C-S"),
        }
    }
}

/// Nominal supply voltage. Only 230 V single phase and 400 V three phase exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "u16", into = "u16")]
pub enum SupplyVoltage {
    #[default]
    V230,
    V400,
}

impl SupplyVoltage {
    pub fn volts(&self) -> f64 {
        match self {
            SupplyVoltage::V230 => 230.0,
            SupplyVoltage::V400 => 400.0,
        }
    }

    pub fn is_three_phase(&self) -> bool {
        matches!(self, SupplyVoltage::V400)
    }
}

impl TryFrom<u16> for SupplyVoltage {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            230 => Ok(SupplyVoltage::V230),
            400 => Ok(SupplyVoltage::V400),
            other => Err(format!("unsupported supply voltage {}V (expected 230 or 400)", other)),
        }
    }
}

impl From<SupplyVoltage> for u16 {
    fn from(voltage: SupplyVoltage) -> Self {
        match voltage {
            SupplyVoltage::V230 => 230,
            SupplyVoltage::V400 => 400,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InstallationMethod {
    #[default]
    Surface,
    Conduit,
    Underground,
}

/// Input to the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationParameters {
    pub pool_type: PoolType,
    /// Pool volume in m³
    pub pool_volume: f64,
    pub heating_type: HeatingType,
    /// Heater rated power in W
    pub heater_power: f64,
    pub filtration_type: FiltrationType,
    /// Pump rated power in W
    pub pump_power: f64,
    /// Lighting load in W
    pub lighting: f64,
    pub has_underwater_lighting: bool,
    pub supply_voltage: SupplyVoltage,
    pub earthing_system: EarthingSystem,
    /// Cable run from the distribution board in m
    pub cable_run: f64,
    pub installation_method: InstallationMethod,
    /// Ambient temperature in °C
    pub ambient_temperature: f64,
    #[serde(default)]
    pub has_pool_cover: bool,
    #[serde(default)]
    pub has_emergency_stop: bool,
}

impl Default for InstallationParameters {
    fn default() -> Self {
        Self {
            pool_type: PoolType::Private,
            pool_volume: 50.0,
            heating_type: HeatingType::Electric,
            heater_power: 3000.0,
            filtration_type: FiltrationType::Sand,
            pump_power: 1100.0,
            lighting: 150.0,
            has_underwater_lighting: false,
            supply_voltage: SupplyVoltage::V230,
            earthing_system: EarthingSystem::TnCS,
            cable_run: 25.0,
            installation_method: InstallationMethod::Surface,
            ambient_temperature: 20.0,
            has_pool_cover: false,
            has_emergency_stop: false,
        }
    }
}

/// Standard conductor cross-sections, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CableSize {
    #[serde(rename = "1.5mm²")]
    Mm1_5,
    #[serde(rename = "2.5mm²")]
    Mm2_5,
    #[serde(rename = "4.0mm²")]
    Mm4,
    #[serde(rename = "6.0mm²")]
    Mm6,
    #[serde(rename = "10mm²")]
    Mm10,
    #[serde(rename = "16mm²")]
    Mm16,
    #[serde(rename = "25mm²")]
    Mm25,
}

impl CableSize {
    pub const LADDER: [CableSize; 7] = [
        CableSize::Mm1_5,
        CableSize::Mm2_5,
        CableSize::Mm4,
        CableSize::Mm6,
        CableSize::Mm10,
        CableSize::Mm16,
        CableSize::Mm25,
    ];

    pub fn area_mm2(&self) -> f64 {
        match self {
            CableSize::Mm1_5 => 1.5,
            CableSize::Mm2_5 => 2.5,
            CableSize::Mm4 => 4.0,
            CableSize::Mm6 => 6.0,
            CableSize::Mm10 => 10.0,
            CableSize::Mm16 => 16.0,
            CableSize::Mm25 => 25.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CableSize::Mm1_5 => "1.5mm²",
            CableSize::Mm2_5 => "2.5mm²",
            CableSize::Mm4 => "4.0mm²",
            CableSize::Mm6 => "6.0mm²",
            CableSize::Mm10 => "10mm²",
            CableSize::Mm16 => "16mm²",
            CableSize::Mm25 => "25mm²",
        }
    }
}

impl fmt::Display for CableSize {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ingress protection against water (second numeral only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IpRating {
    #[serde(rename = "IPX4")]
    Ipx4,
    #[serde(rename = "IPX5")]
    Ipx5,
    #[serde(rename = "IPX7")]
    Ipx7,
    #[serde(rename = "IPX8")]
    Ipx8,
}

impl fmt::Display for IpRating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IpRating::Ipx4 => write!(f, "IPX4"),
            IpRating::Ipx5 => write!(f, "IPX5"),
            IpRating::Ipx7 => write!(f, "IPX7"),
            IpRating::Ipx8 => write!(f, "IPX8"),
        }
    }
}

/// Voltage drop along the cable run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoltageDrop {
    pub volts: f64,
    pub percent: f64,
    pub limit_percent: f64,
}

impl VoltageDrop {
    pub fn exceeds_limit(&self) -> bool {
        self.percent > self.limit_percent
    }
}

/// Analysis of one load (heater, pump or lighting)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CircuitResult {
    pub name: String,
    /// Rated load in W
    pub load: f64,
    /// Operating voltage in V
    pub voltage: f64,
    /// Design current in A
    pub current: f64,
    pub cable_size: CableSize,
    /// Protective device rating in A
    pub protection_rating: u32,
    pub rcd_required: bool,
    pub ip_rating: IpRating,
    pub special_requirements: Vec<String>,
    pub compliance: CircuitCompliance,
    /// Absent for SELV circuits, whose secondary run is not part of the input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voltage_drop: Option<VoltageDrop>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarthingBonding {
    pub system: EarthingSystem,
    pub narrative: String,
    pub bonding_targets: Vec<String>,
}

/// Permitted and prohibited equipment for one zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneRequirements {
    pub zone: String,
    pub name: String,
    pub description: String,
    pub permitted: Vec<String>,
    pub prohibited: Vec<String>,
    pub min_ip_rating: IpRating,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegulatoryCompliance {
    pub bs7671_section702: bool,
    pub rcd_protection: bool,
    pub equipotential_bonding: bool,
    pub selv_lighting: bool,
    pub cable_installation: bool,
    pub issues: Vec<String>,
    pub recommendations: Vec<String>,
}

impl RegulatoryCompliance {
    /// Every flag set and no issues raised
    pub fn is_clean(&self) -> bool {
        self.bs7671_section702
            && self.rcd_protection
            && self.equipotential_bonding
            && self.selv_lighting
            && self.cable_installation
            && self.issues.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyFactors {
    /// Ambient temperature correction applied to cable sizing
    pub temperature_derating: f64,
    /// Diversified load over connected load
    pub diversity_factor: f64,
    pub rcd_trip_current_ma: u32,
    pub max_disconnection_time_s: f64,
}

/// Full calculator output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// Diversified load in W
    pub total_load: f64,
    /// Total design current in A
    pub total_current: f64,
    pub supply_requirements: String,
    pub main_protection: String,
    pub earthing_bonding: EarthingBonding,
    pub circuits: Vec<CircuitResult>,
    pub zones: Vec<ZoneRequirements>,
    pub regulatory_compliance: RegulatoryCompliance,
    pub safety_factors: SafetyFactors,
    pub installation_guidance: Vec<String>,
    pub testing_requirements: Vec<String>,
    pub maintenance_points: Vec<String>,
    pub common_pitfalls: Vec<String>,
}

impl ComplianceReport {
    /// Look up a circuit by name
    pub fn circuit(&self, name: &str) -> Option<&CircuitResult> {
        self.circuits.iter().find(|c| c.name == name)
    }

    /// Content hash of the canonical JSON form
    pub fn digest(&self) -> Result<String, PoolCalcError> {
        let bytes = serde_json::to_vec(self)?;
        Ok(format!("blake3:{}", blake3::hash(&bytes)))
    }
}
