//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON message endpoint and the health check under a
//! single Axum router. The frontend is served from a separate origin, so a
//! CORS layer allowlists that origin, echoing it back on matching requests
//! and omitting the header for any other origin.

pub mod motd;

use axum::Router;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Assemble the application router, allowing cross-origin GETs from the
/// configured frontend origin.
pub fn app(frontend_origin: HeaderValue) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([frontend_origin]))
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(motd::current))
        .route("/healthz", get(healthz))
        .layer(cors)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
