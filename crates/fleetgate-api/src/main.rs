//! Binary entrypoint for the Fleetgate API server.
use fleetgate_api::run;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Default listen address can be overridden with FLEETGATE_ADDR
    let addr = std::env::var("FLEETGATE_ADDR").unwrap_or_else(|_| "0.0.0.0:8790".to_string());
    run(&addr).await;
}
