use axum::{extract::State, http::StatusCode, Json, response::IntoResponse};
use serde_json::json;

use crate::api::state::AppState;

/// Service banner, served at both `/` and `/api/`.
pub async fn root(State(state): State<AppState>) -> impl IntoResponse {
    let base_url = state.settings.server.base_url.trim_end_matches('/');

    Json(json!({
        "name": "E-Cell API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "operational",
        "base_url": base_url,
        "endpoints": {
            "health": "/health",
            "auth": ["/auth/login", "/auth/signup", "/auth/logout", "/auth/reset-password", "/auth/me"],
            "team": "/api/team",
            "events": "/api/events",
            "blogs": "/api/blogs",
            "achievements": "/api/achievements",
            "notifications": "/api/notifications",
            "admin": "/admin/dashboard"
        }
    }))
}

pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}
