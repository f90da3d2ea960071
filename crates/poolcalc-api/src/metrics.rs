//! Prometheus counters for the calculator endpoints.
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

pub struct Metrics {
    registry: Registry,
    evaluations: IntCounterVec,
    validation_failures: IntCounter,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let evaluations = IntCounterVec::new(
            Opts::new("poolcalc_evaluations_total", "Pool installation evaluations"),
            &["pool_type", "status"],
        )?;
        let validation_failures = IntCounter::new(
            "poolcalc_validation_failures_total",
            "Requests rejected by parameter validation",
        )?;

        registry.register(Box::new(evaluations.clone()))?;
        registry.register(Box::new(validation_failures.clone()))?;

        Ok(Self {
            registry,
            evaluations,
            validation_failures,
        })
    }

    /// `status` is the worst circuit verdict of the report
    pub fn record_evaluation(&self, pool_type: &str, status: &str) {
        self.evaluations.with_label_values(&[pool_type, status]).inc();
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures.inc();
    }

    pub fn encode(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).to_string())
    }
}
