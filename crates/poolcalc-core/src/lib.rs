//! PoolCalc Core: Data Model, Tables and Sizing
//!
//! Value types for BS 7671 Section 702 pool installation calculations, the
//! regulatory constant tables and the ladder lookups built on them.

pub mod data_model;
pub mod error;
pub mod sizing;
pub mod tables;
pub mod verdict;

pub use data_model::{
    CableSize, CircuitResult, ComplianceReport, EarthingBonding, EarthingSystem, FiltrationType,
    HeatingType, InstallationMethod, InstallationParameters, IpRating, PoolType,
    RegulatoryCompliance, SafetyFactors, SupplyVoltage, VoltageDrop, ZoneRequirements,
};
pub use error::PoolCalcError;
pub use sizing::{cable_size, protection_rating, temperature_derating, voltage_drop};
pub use tables::DiversityFactors;
pub use verdict::{CircuitCompliance, ComplianceStatus};

/// Regulation edition the tables are drawn from
pub const BS7671_EDITION: &str = "BS 7671:2018+A2:2022";
