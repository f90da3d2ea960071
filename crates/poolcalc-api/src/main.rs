//! Binary entrypoint for the PoolCalc API server.
use anyhow::Context;
use poolcalc_api::{run, AppState};
use poolcalc_compliance::CalculatorProfile;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Default listen address can be overridden with POOLCALC_ADDR
    let addr = std::env::var("POOLCALC_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());

    let profile = match std::env::var("POOLCALC_PROFILE") {
        Ok(path) => CalculatorProfile::load(&path)
            .with_context(|| format!("loading profile {}", path))?,
        Err(_) => CalculatorProfile::bs7671(),
    };
    tracing::info!(profile = %profile.name, "calculator profile loaded");

    let state = AppState::new(profile)?;
    run(&addr, state).await
}
