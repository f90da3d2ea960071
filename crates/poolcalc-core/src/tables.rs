//! Regulatory constant tables for BS 7671 Section 702
//!
//! Ampacity and protection ladders, diversity factors, zone content and the
//! fixed guidance text shipped with every report.

use serde::{Deserialize, Serialize};

use crate::data_model::{CableSize, IpRating};

/// Current-carrying capacity per cable size in A. Anything above 54 A gets 25mm².
pub const CABLE_AMPACITY: [(CableSize, f64); 6] = [
    (CableSize::Mm1_5, 13.0),
    (CableSize::Mm2_5, 17.0),
    (CableSize::Mm4, 23.0),
    (CableSize::Mm6, 30.0),
    (CableSize::Mm10, 40.0),
    (CableSize::Mm16, 54.0),
];

pub const CABLE_FALLBACK: CableSize = CableSize::Mm25;

/// Standard MCB/RCBO ratings in A
pub const PROTECTION_RATINGS: [u32; 8] = [6, 10, 16, 20, 25, 32, 40, 50];

pub const PROTECTION_FALLBACK: u32 = 50;

/// mV/A/m for copper conductors at 70 °C (two-core, single phase)
pub const VOLTAGE_DROP_MV_PER_AMP_METRE: [(CableSize, f64); 7] = [
    (CableSize::Mm1_5, 29.0),
    (CableSize::Mm2_5, 18.0),
    (CableSize::Mm4, 11.0),
    (CableSize::Mm6, 7.3),
    (CableSize::Mm10, 4.4),
    (CableSize::Mm16, 2.8),
    (CableSize::Mm25, 1.75),
];

/// Ambient temperature correction (upper bound °C, factor), 70 °C thermoplastic
pub const TEMPERATURE_CORRECTION: [(f64, f64); 5] = [
    (30.0, 1.00),
    (35.0, 0.94),
    (40.0, 0.87),
    (45.0, 0.79),
    (50.0, 0.71),
];

pub const TEMPERATURE_CORRECTION_FLOOR: f64 = 0.61;

pub const SELV_LIGHTING_VOLTAGE: f64 = 12.0;
pub const SELV_LIGHTING_CABLE: CableSize = CableSize::Mm1_5;
pub const SELV_LIGHTING_PROTECTION: u32 = 6;

pub const RCD_TRIP_CURRENT_MA: u32 = 30;
pub const TT_DISCONNECTION_TIME_S: f64 = 0.2;
pub const TN_DISCONNECTION_TIME_S: f64 = 0.4;

/// Per-load diversity multipliers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiversityFactors {
    pub heater: f64,
    pub pump: f64,
    pub lighting: f64,
}

pub const PRIVATE_DIVERSITY: DiversityFactors = DiversityFactors {
    heater: 0.75,
    pump: 1.0,
    lighting: 0.8,
};

pub const NON_PRIVATE_DIVERSITY: DiversityFactors = DiversityFactors {
    heater: 0.9,
    pump: 1.0,
    lighting: 1.0,
};

// Circuit names in report order
pub const HEATER_CIRCUIT: &str = "Pool Heater";
pub const PUMP_CIRCUIT: &str = "Filtration Pump";
pub const LIGHTING_CIRCUIT: &str = "Pool Lighting";

pub const SUPPLY_16A_SINGLE_PHASE: &str = "16A single phase supply (Type B MCB)";
pub const SUPPLY_32A_SINGLE_PHASE: &str = "32A single phase supply (Type B MCB)";
pub const SUPPLY_25A_THREE_PHASE: &str = "25A three phase supply (Type C MCB)";
pub const SUPPLY_SPECIALIST: &str = "40A+ supply - specialist design required";

pub const TT_EARTHING_NARRATIVE: &str = "TT system: Earth electrode required. Resistance ≤ 200Ω \
(RA × IΔn ≤ 50V). 30mA RCD protection on every pool circuit is the primary fault protection; \
supplementary equipotential bonding connects all extraneous-conductive-parts in zones 0, 1 and 2 \
to the protective conductors.";

pub const TN_EARTHING_NARRATIVE: &str = "TN system: Main protective bonding to the main earthing \
terminal is required for incoming metallic services. Supplementary equipotential bonding connects \
all extraneous-conductive-parts in zones 0, 1 and 2 to the protective conductors of exposed-conductive-parts. \
Verify Zs against the disconnection time for each circuit.";

/// Bonding targets; the flag marks items that only apply to non-private pools
pub const BONDING_TARGETS: [(&str, bool); 7] = [
    ("Pool structure reinforcement (where accessible)", false),
    ("Metallic pool ladders and handrails", false),
    ("Filtration and heater pipework", false),
    ("Diving board and slide supports", false),
    ("Metallic drainage grids and covers", false),
    ("Ventilation ducting", true),
    ("Structural steelwork within zones 0, 1 and 2", false),
];

/// Static zone content
pub struct ZoneSpec {
    pub zone: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub permitted: &'static [&'static str],
    pub prohibited: &'static [&'static str],
    pub min_ip_rating: IpRating,
}

pub const ZONES: [ZoneSpec; 3] = [
    ZoneSpec {
        zone: "Zone 0",
        name: "Immersion zone",
        description: "Interior of the pool basin, including recesses in walls and floor",
        permitted: &[
            "SELV luminaires at 12V AC / 30V DC maximum",
            "Equipment designed for use in pool basins (BS EN 60598-2-18)",
        ],
        prohibited: &[
            "Socket outlets",
            "Switchgear and controlgear",
            "Junction boxes",
            "Mains voltage equipment",
        ],
        min_ip_rating: IpRating::Ipx8,
    },
    ZoneSpec {
        zone: "Zone 1",
        name: "Splash zone",
        description: "2m horizontally from the basin edge and 2.5m above the floor or standing surface",
        permitted: &[
            "SELV equipment with source outside zones 0, 1 and 2",
            "Fixed pool equipment (pumps) under 702.55.2 conditions",
            "Wiring serving equipment in zones 0 and 1",
        ],
        prohibited: &[
            "Socket outlets",
            "Switches and accessories other than SELV",
            "Junction boxes other than for SELV circuits",
        ],
        min_ip_rating: IpRating::Ipx5,
    },
    ZoneSpec {
        zone: "Zone 2",
        name: "Poolside zone",
        description: "1.5m beyond zone 1 (not applicable to fountains)",
        permitted: &[
            "SELV equipment",
            "Socket outlets and switches protected by 30mA RCD",
            "Equipment supplied via electrical separation",
        ],
        prohibited: &[
            "Unprotected mains socket outlets",
            "Equipment below IPX4",
        ],
        min_ip_rating: IpRating::Ipx4,
    },
];

pub const BOILERPLATE_RECOMMENDATIONS: [&str; 3] = [
    "Annual PAT testing of portable pool equipment",
    "Loop impedance (Zs) testing of every circuit at completion and periodic inspection",
    "RCD functional testing every 6 months using the test button",
];

pub const POOL_COVER_RECOMMENDATION: &str =
    "Pool cover motor: locate outside zones 0 and 1 or use SELV controls";

pub const INSTALLATION_GUIDANCE: [&str; 8] = [
    "Confirm zone dimensions on site and mark zones 0, 1 and 2 on the layout drawing",
    "Install the consumer unit or distribution board outside zones 0, 1 and 2",
    "Run each pool load on a dedicated circuit with 30mA RCD protection",
    "Locate SELV safety isolating transformers outside zones 0, 1 and 2",
    "Use SWA cable at 600mm depth (or in ducts) for underground runs",
    "Install supplementary equipotential bonding with 4mm² minimum copper conductors",
    "Fit lockable isolators for pump and heater within sight of the equipment",
    "Seal all cable entries to maintain the declared IP rating",
];

pub const TESTING_REQUIREMENTS: [&str; 7] = [
    "Continuity of protective and supplementary bonding conductors",
    "Insulation resistance at 500V DC (≥ 1MΩ, SELV at 250V DC ≥ 0.5MΩ)",
    "Polarity of all circuits",
    "Earth fault loop impedance (Zs) against maximum tabulated values",
    "RCD operating time at IΔn (≤ 300ms) and 5×IΔn (≤ 40ms)",
    "Earth electrode resistance where the system is TT",
    "Functional testing of emergency stop and isolation devices",
];

pub const MAINTENANCE_POINTS: [&str; 6] = [
    "Inspect luminaire seals and lenses at each pool draining",
    "Check bonding connections for corrosion from pool chemicals",
    "Press RCD test buttons every 6 months and record the result",
    "Verify pump and heater isolators operate freely",
    "Keep plant room dry and ventilated",
    "Periodic inspection and testing at least annually for public pools",
];

pub const COMMON_PITFALLS: [&str; 6] = [
    "Socket outlets installed within zone 1 or 2 without RCD protection",
    "SELV transformers mounted inside zone 2",
    "Missing supplementary bonding to ladders and handrails",
    "Standard IPX4 luminaires used in zone 0",
    "Voltage drop not checked on long runs to outbuildings",
    "Chlorine storage beside electrical equipment in the plant room",
];
