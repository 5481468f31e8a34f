//! Prometheus registry for the rule endpoints, served at `/v1/metrics`.
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::new);

static EVALUATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    let counter = IntCounterVec::new(
        Opts::new(
            "fleetgate_evaluations_total",
            "Rule evaluations served, by endpoint",
        ),
        &["endpoint"],
    )
    .expect("valid counter definition");
    REGISTRY
        .register(Box::new(counter.clone()))
        .expect("counter registered once");
    counter
});

/// Count one evaluation served by the named endpoint.
pub fn record_evaluation(endpoint: &str) {
    EVALUATIONS.with_label_values(&[endpoint]).inc();
}

/// Render the registry in prometheus text format.
pub fn encode() -> Result<String, prometheus::Error> {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    encoder.encode(&REGISTRY.gather(), &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).to_string())
}
