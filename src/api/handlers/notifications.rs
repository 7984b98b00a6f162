use axum::{extract::State, Json};

use crate::{api::state::AppState, notify::Notification};

/// Recent success and error messages, oldest first.
pub async fn list(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.service_context.recent_notifications.snapshot().await)
}
