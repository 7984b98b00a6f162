use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    api::{handlers::validate_not_blank, state::AppState},
    domain::Identity,
    error::{AppError, Result},
};

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: Identity,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    req.validate()?;

    let user = state.service_context.session
        .sign_in(&req.email, &req.password)
        .await?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user,
    }))
}

pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    req.validate()?;

    let user = state.service_context.session
        .sign_up(req.name.trim(), &req.email, &req.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "Account created".to_string(),
            user,
        }),
    ))
}

pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.service_context.session.sign_out().await;
    StatusCode::NO_CONTENT
}

/// Same answer for every address, known or not.
pub async fn reset_password(
    State(state): State<AppState>,
    Json(req): Json<ResetPasswordRequest>,
) -> Result<Json<MessageResponse>> {
    req.validate()?;

    state.service_context.session.reset_password(&req.email).await;

    Ok(Json(MessageResponse {
        message: "If an account exists for that email, a reset link has been sent".to_string(),
    }))
}

pub async fn me(State(state): State<AppState>) -> Result<Json<Identity>> {
    let identity = state.service_context.session
        .current()
        .await
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(identity))
}
