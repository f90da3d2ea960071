//! API error mapping
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use poolcalc_core::PoolCalcError;
use poolcalc_out::RenderError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Calc(#[from] PoolCalcError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("METRICS/{0}")]
    Metrics(#[from] prometheus::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Calc(PoolCalcError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Render(RenderError::UnknownTemplate(_)) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
