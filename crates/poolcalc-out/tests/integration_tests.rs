//! Integration tests for poolcalc-out with the workspace template file.
//!
//! These tests verify the full rendering path from installation parameters
//! to report text using templates/report-templates.yaml.

use poolcalc_compliance::{
    calculate_pool_installation, EarthingSystem, InstallationParameters, PoolType,
};
use poolcalc_out::{quick, render, render_report, RenderError, RenderRequest, CIRCUIT_TABLE,
    COMPLIANCE_ISSUES, REPORT_SUMMARY};

/// Path to the templates file relative to the workspace root
const TEMPLATES_PATH: &str = "templates/report-templates.yaml";

fn templates_path() -> String {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = std::path::Path::new(&manifest_dir).parent().unwrap().parent().unwrap();
    workspace_root.join(TEMPLATES_PATH).to_string_lossy().to_string()
}

// =============================================================================
// Summary
// =============================================================================

#[test]
fn test_summary_private_pool() {
    let report = calculate_pool_installation(&InstallationParameters::default());
    let output = render_report(&report, REPORT_SUMMARY).unwrap();

    assert!(output.contains("Total load: 3470W"));
    assert!(output.contains("32A single phase supply (Type B MCB)"));
    assert!(output.contains("Pool Heater: 13.04A, 2.5mm², 16A, IPX4, 30mA RCD [compliant]"));
    assert!(output.contains("Annual PAT testing"));
    assert!(!output.contains("Issues:"));
}

#[test]
fn test_summary_lists_issues() {
    let report = calculate_pool_installation(&InstallationParameters {
        pool_type: PoolType::Public,
        earthing_system: EarthingSystem::Tt,
        ..Default::default()
    });
    let output = render_report(&report, REPORT_SUMMARY).unwrap();

    assert!(output.contains("Issues:"));
    assert!(output.contains("Emergency stop is mandatory"));
    assert!(output.contains("Earth electrode required"));
    assert!(output.contains("Ventilation ducting"));
}

// =============================================================================
// Tables and flags
// =============================================================================

#[test]
fn test_circuit_table_from_file() {
    let report = calculate_pool_installation(&InstallationParameters {
        has_underwater_lighting: true,
        ..Default::default()
    });

    let result = render(
        &RenderRequest {
            template_name: CIRCUIT_TABLE.to_string(),
            templates_path: Some(templates_path()),
        },
        &report,
    )
    .unwrap();

    assert_eq!(result.template_used, CIRCUIT_TABLE);
    assert!(result.output.starts_with("| Circuit |"));
    assert!(result.output.contains("| Pool Lighting | 150 | 12.50 | 1.5mm² | 6A | IPX8 | No (SELV) | compliant |"));
}

#[test]
fn test_compliance_flags() {
    let report = calculate_pool_installation(&InstallationParameters {
        pool_type: PoolType::Public,
        ..Default::default()
    });
    let output = render_report(&report, COMPLIANCE_ISSUES).unwrap();
    assert!(output.contains("Section 702: FAIL"));
    assert!(output.contains("SELV lighting: PASS"));

    let clean = calculate_pool_installation(&InstallationParameters::default());
    let output = render_report(&clean, COMPLIANCE_ISSUES).unwrap();
    assert!(output.contains("No issues raised."));
}

#[test]
fn test_unknown_template_and_missing_file() {
    let report = calculate_pool_installation(&InstallationParameters::default());
    assert!(matches!(
        render_report(&report, "invoice"),
        Err(RenderError::UnknownTemplate(_))
    ));

    let result = render(
        &RenderRequest {
            template_name: REPORT_SUMMARY.to_string(),
            templates_path: Some("does/not/exist.yaml".to_string()),
        },
        &report,
    );
    assert!(matches!(result, Err(RenderError::Template(_))));
}

#[test]
fn test_quick_headline() {
    let report = calculate_pool_installation(&InstallationParameters::default());
    assert_eq!(
        quick::headline(&report),
        "3470W, 32A single phase supply (Type B MCB), 0 issues, worst circuit COMPLIANT"
    );
}

#[test]
fn test_non_finite_loads_still_render() {
    let nan_pump = calculate_pool_installation(&InstallationParameters {
        pump_power: f64::NAN,
        ..Default::default()
    });
    let output = render_report(&nan_pump, REPORT_SUMMARY).unwrap();
    assert!(output.contains("Total load: n/aW"));
    assert!(output.contains("Filtration Pump: n/aA"));

    // Each load is finite but the diversified sum overflows to infinity
    let overflow = calculate_pool_installation(&InstallationParameters {
        heater_power: 1e308,
        pump_power: 1e308,
        lighting: 1e308,
        ..Default::default()
    });
    for template in [REPORT_SUMMARY, CIRCUIT_TABLE, COMPLIANCE_ISSUES] {
        assert!(render_report(&overflow, template).is_ok(), "{}", template);
    }
}
