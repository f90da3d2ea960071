//! PoolCalc API /v1: REST endpoints over the Section 702 calculator
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;

use axum::{
    routing::{get, post},
    Router,
};
use poolcalc_compliance::{CalculatorProfile, PoolCalculator};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
use metrics::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<PoolCalculator>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(profile: CalculatorProfile) -> Result<Self, prometheus::Error> {
        Ok(Self {
            calculator: Arc::new(PoolCalculator::new(profile)),
            metrics: Arc::new(Metrics::new()?),
        })
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/v1/pool/calculate", post(handlers::calculate))
        .route("/v1/pool/validate", post(handlers::validate))
        .route("/v1/pool/report", post(handlers::report))
        .route("/v1/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
}

pub async fn run(addr: &str, state: AppState) -> anyhow::Result<()> {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("PoolCalc API listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
