// ============================
// crates/backend-lib/src/handlers/health.rs
// ============================
//! Liveness probe.
use axum::Json;
use password_common::HealthResponse;

/// Always reports `{"status":"ok"}` while the process is serving
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
