// ============================
// crates/backend-lib/src/router.rs
// ============================
//! HTTP router.
use crate::config::Settings;
use crate::handlers::{health, password};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Routes under `/password`
fn password_routes() -> Router {
    Router::new()
        .route("/validate", post(password::validate_password))
        .route("/generate", post(password::generate_password))
        .route("/strength", post(password::strength))
        .route("/full", post(password::full_analysis))
}

/// Create the application router with its HTTP layers
pub fn create_router(settings: &Settings) -> Router {
    let router = Router::new()
        .route("/health", get(health::health))
        .nest("/password", password_routes())
        .layer(DefaultBodyLimit::max(settings.http.body_limit_bytes))
        .layer(TraceLayer::new_for_http());

    if settings.http.permissive_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    }
}
