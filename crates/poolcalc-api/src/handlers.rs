//! HTTP handlers for /v1
use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use poolcalc_compliance::{evaluate_validated, validate_parameters, FieldViolation};
use poolcalc_core::{ComplianceReport, ComplianceStatus, InstallationParameters};
use poolcalc_out::{default_renderer, REPORT_SUMMARY};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct CalculateOptions {
    /// Reject negative or non-finite inputs before evaluating
    #[serde(default)]
    pub strict: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub request_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub report_hash: String,
    pub report: ComplianceReport,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub violations: Vec<FieldViolation>,
}

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    pub parameters: InstallationParameters,
    #[serde(default)]
    pub template: Option<String>,
}

fn worst_status(report: &ComplianceReport) -> ComplianceStatus {
    report
        .circuits
        .iter()
        .map(|c| c.compliance.status)
        .max()
        .unwrap_or(ComplianceStatus::Compliant)
}

fn evaluate(
    state: &AppState,
    params: &InstallationParameters,
    strict: bool,
) -> Result<ComplianceReport, ApiError> {
    let report = if strict {
        evaluate_validated(&state.calculator, params).inspect_err(|_| {
            state.metrics.record_validation_failure();
        })?
    } else {
        state.calculator.evaluate(params)
    };

    state
        .metrics
        .record_evaluation(params.pool_type.as_str(), worst_status(&report).as_str());
    Ok(report)
}

/// POST /v1/pool/calculate
pub async fn calculate(
    State(state): State<AppState>,
    Query(options): Query<CalculateOptions>,
    Json(params): Json<InstallationParameters>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let report = evaluate(&state, &params, options.strict)?;
    let report_hash = report.digest()?;

    Ok(Json(CalculateResponse {
        request_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        report_hash,
        report,
    }))
}

/// POST /v1/pool/validate
pub async fn validate(
    State(state): State<AppState>,
    Json(params): Json<InstallationParameters>,
) -> Json<ValidateResponse> {
    let violations = match validate_parameters(&params) {
        Ok(()) => Vec::new(),
        Err(report) => {
            state.metrics.record_validation_failure();
            report.violations
        }
    };

    Json(ValidateResponse {
        valid: violations.is_empty(),
        violations,
    })
}

/// POST /v1/pool/report
pub async fn report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let report = evaluate(&state, &request.parameters, false)?;
    let template = request.template.as_deref().unwrap_or(REPORT_SUMMARY);

    let data = serde_json::to_value(&report).map_err(poolcalc_core::PoolCalcError::from)?;
    let output = default_renderer()?.render(template, &data)?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        output,
    ))
}

/// GET /v1/health
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "version": env!("CARGO_PKG_VERSION"),
            "edition": poolcalc_core::BS7671_EDITION,
        })),
    )
}

/// GET /metrics
pub async fn metrics(State(state): State<AppState>) -> Result<String, ApiError> {
    Ok(state.metrics.encode()?)
}
