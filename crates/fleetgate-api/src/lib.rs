//! Fleetgate API /v1: REST endpoints over the rule engine
pub mod handlers;
pub mod metrics;
pub mod middleware;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub async fn create_app() -> Router {
    Router::new()
        .route(
            "/v1/driver-hours/evaluate",
            post(handlers::evaluate_driver_hours),
        )
        .route("/v1/compliance/classify-date", post(handlers::classify_date))
        .route("/v1/tacho/status", post(handlers::tacho_status))
        .route("/v1/compliance/score", post(handlers::compliance_score))
        .route("/v1/health", get(handlers::health))
        .route("/v1/metrics", get(handlers::export_metrics))
        .layer(middleware::cors())
        .layer(TraceLayer::new_for_http())
}

pub async fn run(addr: &str) {
    let app = create_app().await;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("Fleetgate API listening on {}", addr);
    axum::serve(listener, app)
        .await
        .expect("Server error");
}
