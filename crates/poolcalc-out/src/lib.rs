//! PoolCalc-OUT: Compliance Report to Text Renderer
//!
//! Renders a `ComplianceReport` into plain text or markdown using named
//! handlebars templates.
//!
//! # Example
//!
//! ```ignore
//! use poolcalc_out::{render_report, REPORT_SUMMARY};
//!
//! let report = poolcalc_compliance::calculate_pool_installation(&Default::default());
//! let text = render_report(&report, REPORT_SUMMARY).unwrap();
//! println!("{}", text);
//! ```

pub mod renderer;
pub mod templates;

use once_cell::sync::Lazy;
use poolcalc_core::ComplianceReport;
use renderer::ReportRenderer;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const REPORT_SUMMARY: &str = "report_summary";
pub const CIRCUIT_TABLE: &str = "circuit_table";
pub const COMPLIANCE_ISSUES: &str = "compliance_issues";

/// Errors that can occur during rendering
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("Template load failed: {0}")]
    Template(String),
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
    #[error("Render failed: {0}")]
    Render(String),
    #[error("Serialize failed: {0}")]
    Serialize(String),
}

impl From<RenderError> for poolcalc_core::PoolCalcError {
    fn from(err: RenderError) -> Self {
        poolcalc_core::PoolCalcError::Render(err.to_string())
    }
}

static DEFAULT_RENDERER: Lazy<Result<ReportRenderer, RenderError>> =
    Lazy::new(ReportRenderer::embedded);

/// Request to render a report
#[derive(Debug, Clone, Deserialize)]
pub struct RenderRequest {
    pub template_name: String,
    /// Path to a templates file (optional, uses the embedded set if not provided)
    pub templates_path: Option<String>,
}

/// Result of a render operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    pub output: String,
    pub template_used: String,
}

pub fn default_renderer() -> Result<&'static ReportRenderer, RenderError> {
    DEFAULT_RENDERER.as_ref().map_err(Clone::clone)
}

/// Render a report with one of the embedded templates
pub fn render_report(report: &ComplianceReport, template_name: &str) -> Result<String, RenderError> {
    let data = serde_json::to_value(report).map_err(|e| RenderError::Serialize(e.to_string()))?;
    default_renderer()?.render(template_name, &data)
}

/// Render a report following a request, loading templates from disk when a path is given
pub fn render(request: &RenderRequest, report: &ComplianceReport) -> Result<RenderResult, RenderError> {
    let output = match &request.templates_path {
        Some(path) => {
            let data =
                serde_json::to_value(report).map_err(|e| RenderError::Serialize(e.to_string()))?;
            ReportRenderer::load(path)?.render(&request.template_name, &data)?
        }
        None => render_report(report, &request.template_name)?,
    };

    Ok(RenderResult {
        output,
        template_used: request.template_name.clone(),
    })
}

/// Quick one-line helpers
pub mod quick {
    use poolcalc_core::{ComplianceReport, ComplianceStatus};

    /// "3470W, 32A single phase supply (Type B MCB), 0 issues, worst circuit COMPLIANT"
    pub fn headline(report: &ComplianceReport) -> String {
        let worst = report
            .circuits
            .iter()
            .map(|c| c.compliance.status)
            .max()
            .unwrap_or(ComplianceStatus::Compliant);

        format!(
            "{:.0}W, {}, {} issues, worst circuit {}",
            report.total_load,
            report.supply_requirements,
            report.regulatory_compliance.issues.len(),
            worst
        )
    }
}
