use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    api::{handlers::json_or_no_content, state::AppState},
    domain::{Achievement, AchievementPatch, NewAchievement},
    error::{AppError, Result},
};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAchievementRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(equal = 4, message = "Year must be four digits"))]
    pub year: String,
    pub image: Option<String>,
}

impl From<CreateAchievementRequest> for NewAchievement {
    fn from(req: CreateAchievementRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            year: req.year,
            image: req.image.filter(|i| !i.is_empty()),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAchievementRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    #[validate(length(equal = 4, message = "Year must be four digits"))]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "crate::domain::clearable")]
    pub image: Option<Option<String>>,
}

impl From<UpdateAchievementRequest> for AchievementPatch {
    fn from(req: UpdateAchievementRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            year: req.year,
            // An empty string clears the image, same as `null`.
            image: req.image.map(|image| image.filter(|i| !i.is_empty())),
        }
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Achievement>>> {
    Ok(Json(state.service_context.content.achievements().await?))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Achievement>> {
    let achievement = state.service_context.content
        .find_achievement(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Achievement not found".to_string()))?;

    Ok(Json(achievement))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateAchievementRequest>,
) -> Result<(StatusCode, Json<Achievement>)> {
    req.validate()?;

    let achievement = state.service_context.content.add_achievement(req.into()).await?;

    Ok((StatusCode::CREATED, Json(achievement)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateAchievementRequest>,
) -> Result<Response> {
    req.validate()?;

    let achievement = state.service_context.content.update_achievement(&id, req.into()).await?;
    Ok(json_or_no_content(achievement))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.service_context.content.delete_achievement(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
