//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: infrastructure wiring (the document store handle)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and JSON envelopes
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The store handle is created here, once per process, and shared with
/// every handler via an `Extension` layer.
pub fn build_app() -> Router {
    build_app_with(Arc::new(services::build_services()))
}

/// Router over explicitly supplied services (tests inject their own).
pub fn build_app_with(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(Extension(services))
}
