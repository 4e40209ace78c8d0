//! HTTP server hosting the Dioxus app.

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::app::App;

#[derive(Debug, Serialize, PartialEq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
}

pub async fn health_handler() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("ADMIN_CONSOLE_VERSION"),
        git_sha: env!("ADMIN_CONSOLE_GIT_SHA"),
    })
}

/// Health check plus every other path served by the app.
pub fn build_router() -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .merge(dioxus::server::router(App))
        .layer(TraceLayer::new_for_http())
}
