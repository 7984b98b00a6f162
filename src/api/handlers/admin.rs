use axum::{
    extract::State,
    Extension,
    Json,
};

use crate::{
    api::{middleware::auth::CurrentUser, state::AppState},
    error::Result,
    service::DashboardStats,
};

pub async fn dashboard(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Json<DashboardStats>> {
    tracing::debug!("Dashboard requested by {}", user.identity.email);
    let stats = state.service_context.content.dashboard().await?;
    Ok(Json(stats))
}
