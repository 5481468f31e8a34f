//! Middleware for the API router. Request tracing comes from the
//! `TraceLayer` wired in `create_app`; this module holds the rest.
use tower_http::cors::CorsLayer;

pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}
