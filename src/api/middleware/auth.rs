use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{
    api::state::AppState,
    domain::Identity,
    error::AppError,
};

#[derive(Clone)]
pub struct CurrentUser {
    pub identity: Identity,
}

/// Lets the request through only when the site session belongs to an admin.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let identity = state.service_context.session
        .current()
        .await
        .ok_or(AppError::Unauthorized)?;

    if !identity.is_admin() {
        tracing::debug!("Rejected admin request from {}", identity.email);
        return Err(AppError::Forbidden);
    }

    request.extensions_mut().insert(CurrentUser { identity });

    Ok(next.run(request).await)
}
