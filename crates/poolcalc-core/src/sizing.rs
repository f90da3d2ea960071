//! Cable and protective device selection
//!
//! Both ladders fall back silently to their largest entry when the current
//! exceeds every band.

use crate::data_model::{CableSize, VoltageDrop};
use crate::tables::{
    CABLE_AMPACITY, CABLE_FALLBACK, PROTECTION_FALLBACK, PROTECTION_RATINGS,
    TEMPERATURE_CORRECTION, TEMPERATURE_CORRECTION_FLOOR, VOLTAGE_DROP_MV_PER_AMP_METRE,
};

/// Smallest cable whose ampacity covers `current / derating`.
///
/// The derating divides the current; the ampacity table itself is never scaled.
pub fn cable_size(current: f64, derating: f64) -> CableSize {
    let derated = current / derating;
    CABLE_AMPACITY
        .iter()
        .find(|(_, ampacity)| derated <= *ampacity)
        .map(|(size, _)| *size)
        .unwrap_or(CABLE_FALLBACK)
}

/// Smallest standard protective device rating not below `current`
pub fn protection_rating(current: f64) -> u32 {
    PROTECTION_RATINGS
        .iter()
        .copied()
        .find(|rating| current <= f64::from(*rating))
        .unwrap_or(PROTECTION_FALLBACK)
}

/// Ambient temperature correction factor (Ca). No uprating below 30 °C.
pub fn temperature_derating(ambient_c: f64) -> f64 {
    TEMPERATURE_CORRECTION
        .iter()
        .find(|(upper, _)| ambient_c <= *upper)
        .map(|(_, factor)| *factor)
        .unwrap_or(TEMPERATURE_CORRECTION_FLOOR)
}

pub fn mv_per_amp_metre(size: CableSize) -> f64 {
    VOLTAGE_DROP_MV_PER_AMP_METRE
        .iter()
        .find(|(s, _)| *s == size)
        .map(|(_, mv)| *mv)
        .unwrap_or(0.0)
}

/// Voltage drop as `mV/A/m × I × L / 1000`
pub fn voltage_drop(
    current: f64,
    length_m: f64,
    size: CableSize,
    supply_volts: f64,
    limit_percent: f64,
) -> VoltageDrop {
    let volts = mv_per_amp_metre(size) * current * length_m / 1000.0;
    let percent = if supply_volts > 0.0 {
        volts / supply_volts * 100.0
    } else {
        0.0
    };

    VoltageDrop {
        volts: round_dp(volts, 2),
        percent: round_dp(percent, 2),
        limit_percent,
    }
}

pub fn round_dp(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cable_size_boundaries() {
        assert_eq!(cable_size(13.0, 1.0), CableSize::Mm1_5);
        assert_eq!(cable_size(13.01, 1.0), CableSize::Mm2_5);
        assert_eq!(cable_size(54.0, 1.0), CableSize::Mm16);
        assert_eq!(cable_size(54.01, 1.0), CableSize::Mm25);
    }

    #[test]
    fn test_cable_size_divides_current() {
        // 12A / 0.87 = 13.79A, over the 1.5mm² band
        assert_eq!(cable_size(12.0, 0.87), CableSize::Mm2_5);
        assert_eq!(cable_size(12.0, 1.0), CableSize::Mm1_5);
    }

    #[test]
    fn test_cable_size_silent_fallback() {
        assert_eq!(cable_size(500.0, 1.0), CableSize::Mm25);
        assert_eq!(cable_size(-10.0, 1.0), CableSize::Mm1_5);
    }

    #[test]
    fn test_cable_size_monotonic() {
        for derating in [0.61, 0.71, 0.87, 1.0] {
            let mut previous = CableSize::Mm1_5;
            for step in 0..=1200 {
                let current = f64::from(step) * 0.1;
                let size = cable_size(current, derating);
                assert!(CableSize::LADDER.contains(&size));
                assert!(size >= previous, "{}A at {} shrank the cable", current, derating);
                previous = size;
            }
        }
    }

    #[test]
    fn test_protection_rating_boundaries() {
        assert_eq!(protection_rating(6.0), 6);
        assert_eq!(protection_rating(6.01), 10);
        assert_eq!(protection_rating(32.0), 32);
        assert_eq!(protection_rating(120.0), 50);
    }

    #[test]
    fn test_protection_rating_monotonic() {
        let mut previous = 0;
        for step in 0..=700 {
            let rating = protection_rating(f64::from(step) * 0.1);
            assert!(PROTECTION_RATINGS.contains(&rating));
            assert!(rating >= previous);
            previous = rating;
        }
    }

    #[test]
    fn test_temperature_derating() {
        assert_eq!(temperature_derating(20.0), 1.0);
        assert_eq!(temperature_derating(30.0), 1.0);
        assert_eq!(temperature_derating(38.0), 0.87);
        assert_eq!(temperature_derating(60.0), 0.61);
    }

    #[test]
    fn test_voltage_drop() {
        // 13.04A over 25m of 2.5mm²: 18 × 13.04 × 25 / 1000 = 5.87V
        let drop = voltage_drop(13.04, 25.0, CableSize::Mm2_5, 230.0, 5.0);
        assert_eq!(drop.volts, 5.87);
        assert_eq!(drop.percent, 2.55);
        assert!(!drop.exceeds_limit());
    }
}
