//! Per-circuit analysis for heater, pump and lighting loads

use poolcalc_core::sizing::{cable_size, protection_rating, round_dp, voltage_drop};
use poolcalc_core::tables::{
    HEATER_CIRCUIT, LIGHTING_CIRCUIT, PROTECTION_FALLBACK, PUMP_CIRCUIT, SELV_LIGHTING_CABLE,
    SELV_LIGHTING_PROTECTION, SELV_LIGHTING_VOLTAGE,
};
use poolcalc_core::{
    CircuitCompliance, CircuitResult, ComplianceStatus, FiltrationType, HeatingType,
    InstallationParameters, IpRating, VoltageDrop,
};

use crate::profile::CalculatorProfile;

/// Filtration cycle used for the turnover note (hours)
const TURNOVER_HOURS: f64 = 6.0;

pub fn analyze_heater(
    params: &InstallationParameters,
    derating: f64,
    profile: &CalculatorProfile,
) -> CircuitResult {
    let voltage = params.supply_voltage.volts();
    let current = params.heater_power / voltage;
    let cable = cable_size(current, derating);
    let drop = voltage_drop(
        current,
        params.cable_run,
        cable,
        voltage,
        profile.power_voltage_drop_percent,
    );

    let special_requirements = match params.heating_type {
        HeatingType::Electric => vec![
            "Dedicated radial circuit from the consumer unit".to_string(),
            "30mA RCD protection mandatory (Regulation 702.411.3.3)".to_string(),
            "Heater located outside zones 0 and 1".to_string(),
            "Bond metallic heater casing and pipework".to_string(),
        ],
        HeatingType::HeatPump => vec![
            "Dedicated radial circuit rated for compressor starting current".to_string(),
            "Lockable isolator within sight of the outdoor unit".to_string(),
            "Route condensate drainage away from electrical connections".to_string(),
        ],
        HeatingType::Gas => vec![
            "Electrical supply for boiler controls and ignition only".to_string(),
            "Fused connection unit with local isolation".to_string(),
            "Main protective bonding of gas pipework at point of entry".to_string(),
        ],
    };

    CircuitResult {
        name: HEATER_CIRCUIT.to_string(),
        load: params.heater_power,
        voltage,
        current: round_dp(current, 2),
        cable_size: cable,
        protection_rating: protection_rating(current),
        rcd_required: true,
        ip_rating: IpRating::Ipx4,
        special_requirements,
        compliance: mains_compliance(current, &drop),
        voltage_drop: Some(drop),
    }
}

pub fn analyze_pump(
    params: &InstallationParameters,
    derating: f64,
    profile: &CalculatorProfile,
) -> CircuitResult {
    let voltage = params.supply_voltage.volts();
    let current = params.pump_power / voltage;
    let cable = cable_size(current, derating);
    let drop = voltage_drop(
        current,
        params.cable_run,
        cable,
        voltage,
        profile.power_voltage_drop_percent,
    );

    let mut special_requirements = vec![
        "Motor starting current up to 6× full load: Type C device may be needed".to_string(),
        "Lockable local isolator for maintenance".to_string(),
        "Pump located outside zones 0 and 1 or in a plant room".to_string(),
    ];
    if params.filtration_type == FiltrationType::De {
        special_requirements.push(
            "DE filtration: additional earth fault protection and bonding of metallic filter housing"
                .to_string(),
        );
    }
    if params.pool_volume > 0.0 {
        special_requirements.push(format!(
            "Filtration turnover {:.1} m³/h for a {}-hour cycle",
            params.pool_volume / TURNOVER_HOURS,
            TURNOVER_HOURS
        ));
    }

    CircuitResult {
        name: PUMP_CIRCUIT.to_string(),
        load: params.pump_power,
        voltage,
        current: round_dp(current, 2),
        cable_size: cable,
        protection_rating: protection_rating(current),
        rcd_required: true,
        ip_rating: IpRating::Ipx5,
        special_requirements,
        compliance: mains_compliance(current, &drop),
        voltage_drop: Some(drop),
    }
}

pub fn analyze_lighting(
    params: &InstallationParameters,
    derating: f64,
    profile: &CalculatorProfile,
) -> CircuitResult {
    if params.has_underwater_lighting {
        return selv_lighting(params);
    }

    let voltage = params.supply_voltage.volts();
    let current = params.lighting / voltage;
    let cable = cable_size(current, derating);
    let drop = voltage_drop(
        current,
        params.cable_run,
        cable,
        voltage,
        profile.lighting_voltage_drop_percent,
    );

    CircuitResult {
        name: LIGHTING_CIRCUIT.to_string(),
        load: params.lighting,
        voltage,
        current: round_dp(current, 2),
        cable_size: cable,
        protection_rating: protection_rating(current),
        rcd_required: true,
        ip_rating: IpRating::Ipx4,
        special_requirements: vec![
            "Luminaires at least 2m from the pool edge (outside zone 1)".to_string(),
            "30mA RCD protection".to_string(),
            "Switches outside zones 0 and 1".to_string(),
        ],
        compliance: mains_compliance(current, &drop),
        voltage_drop: Some(drop),
    }
}

/// Underwater lighting is always SELV: sizes are fixed regardless of load.
fn selv_lighting(params: &InstallationParameters) -> CircuitResult {
    let voltage = SELV_LIGHTING_VOLTAGE;
    let current = params.lighting / voltage;

    CircuitResult {
        name: LIGHTING_CIRCUIT.to_string(),
        load: params.lighting,
        voltage,
        current: round_dp(current, 2),
        cable_size: SELV_LIGHTING_CABLE,
        protection_rating: SELV_LIGHTING_PROTECTION,
        rcd_required: false,
        ip_rating: IpRating::Ipx8,
        special_requirements: vec![
            "SELV supply at 12V AC maximum (Regulation 702.410.3.4.1)".to_string(),
            "Safety isolating transformer outside zones 0, 1 and 2".to_string(),
            "Luminaires to BS EN 60598-2-18".to_string(),
            "No RCD required on the SELV secondary circuit".to_string(),
        ],
        compliance: selv_compliance(voltage),
        voltage_drop: None,
    }
}

fn selv_compliance(voltage: f64) -> CircuitCompliance {
    if voltage == SELV_LIGHTING_VOLTAGE {
        CircuitCompliance::compliant().with_reason("SELV supply at 12V AC")
    } else {
        CircuitCompliance::warning("Underwater lighting must be supplied at 12V AC SELV")
    }
}

fn mains_compliance(current: f64, drop: &VoltageDrop) -> CircuitCompliance {
    let mut compliance = CircuitCompliance::compliant().with_reason("30mA RCD protection provided");

    if drop.exceeds_limit() {
        compliance = compliance.escalate(
            ComplianceStatus::Warning,
            format!(
                "Voltage drop {:.2}% exceeds {:.0}% limit: increase cable size",
                drop.percent, drop.limit_percent
            ),
        );
    } else {
        compliance = compliance.with_reason(format!(
            "Voltage drop {:.2}% within {:.0}% limit",
            drop.percent, drop.limit_percent
        ));
    }

    if current > f64::from(PROTECTION_FALLBACK) {
        compliance = compliance.escalate(
            ComplianceStatus::NonCompliant,
            format!(
                "Design current {:.1}A exceeds the largest standard device ({}A): specialist design required",
                current, PROTECTION_FALLBACK
            ),
        );
    }

    compliance
}
