use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    api::{handlers::json_or_no_content, state::AppState},
    domain::{CohortYear, NewTeamMember, TeamMember, TeamMemberPatch},
    error::{AppError, Result},
};

#[derive(Debug, Deserialize)]
pub struct ListTeamQuery {
    pub year: Option<CohortYear>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamMemberRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: String,
    pub year: CohortYear,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub linkedin: String,
}

impl From<CreateTeamMemberRequest> for NewTeamMember {
    fn from(req: CreateTeamMemberRequest) -> Self {
        Self {
            name: req.name,
            role: req.role,
            year: req.year,
            image: req.image,
            linkedin: req.linkedin,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTeamMemberRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Role is required"))]
    pub role: Option<String>,
    pub year: Option<CohortYear>,
    pub image: Option<String>,
    pub linkedin: Option<String>,
}

impl From<UpdateTeamMemberRequest> for TeamMemberPatch {
    fn from(req: UpdateTeamMemberRequest) -> Self {
        Self {
            name: req.name,
            role: req.role,
            year: req.year,
            image: req.image,
            linkedin: req.linkedin,
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListTeamQuery>,
) -> Result<Json<Vec<TeamMember>>> {
    let members = state.service_context.content
        .search_team(params.year, params.q.as_deref())
        .await?;

    Ok(Json(members))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TeamMember>> {
    let member = state.service_context.content
        .find_team_member(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Team member not found".to_string()))?;

    Ok(Json(member))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateTeamMemberRequest>,
) -> Result<(StatusCode, Json<TeamMember>)> {
    req.validate()?;

    let member = state.service_context.content.add_team_member(req.into()).await?;

    Ok((StatusCode::CREATED, Json(member)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTeamMemberRequest>,
) -> Result<Response> {
    req.validate()?;

    let member = state.service_context.content.update_team_member(&id, req.into()).await?;
    Ok(json_or_no_content(member))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.service_context.content.delete_team_member(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
