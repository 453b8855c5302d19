use std::sync::Arc;

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::AppState;

pub const SERVICE_NAME: &str = "capture-client-website";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    /// Seconds since the server started.
    pub uptime: f64,
    pub service: &'static str,
    pub version: &'static str,
}

pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "healthy",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        uptime: state.started_at.elapsed().as_secs_f64(),
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    };
    (
        [(header::CACHE_CONTROL, "no-store, no-cache, must-revalidate")],
        Json(body),
    )
}
