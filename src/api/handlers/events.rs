use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Response,
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    api::{handlers::{json_or_no_content, validate_iso_date}, state::AppState},
    domain::{Event, EventPatch, NewEvent, Registration},
    error::{AppError, Result},
    service::EventStatus,
};

#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    #[serde(default)]
    pub status: EventStatus,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(custom(function = "validate_iso_date"))]
    pub date: String,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub is_past: bool,
    pub registrations: Option<u32>,
}

impl From<CreateEventRequest> for NewEvent {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            date: req.date,
            location: req.location,
            image: req.image,
            is_past: req.is_past,
            registrations: req.registrations,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    #[validate(custom(function = "validate_iso_date"))]
    pub date: Option<String>,
    #[validate(length(min = 1, message = "Location is required"))]
    pub location: Option<String>,
    pub image: Option<String>,
    pub is_past: Option<bool>,
    #[serde(default, deserialize_with = "crate::domain::clearable")]
    pub registrations: Option<Option<u32>>,
}

impl From<UpdateEventRequest> for EventPatch {
    fn from(req: UpdateEventRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            date: req.date,
            location: req.location,
            image: req.image,
            is_past: req.is_past,
            registrations: req.registrations,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegistrationRequest {
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub name: String,
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub email: String,
    #[validate(length(min = 1, message = "Please fill in all required fields"))]
    pub phone: String,
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListEventsQuery>,
) -> Result<Json<Vec<Event>>> {
    let events = state.service_context.content
        .search_events(params.status, params.q.as_deref())
        .await?;

    Ok(Json(events))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>> {
    let event = state.service_context.content
        .find_event(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".to_string()))?;

    Ok(Json(event))
}

pub async fn related(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<RelatedQuery>,
) -> Result<Json<Vec<Event>>> {
    let events = state.service_context.content
        .related_events(&id, params.limit.unwrap_or(3))
        .await?;

    Ok(Json(events))
}

pub async fn register(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<RegistrationRequest>,
) -> Result<Response> {
    if let Err(e) = req.validate() {
        state.service_context.notifications
            .error("Please fill in all required fields")
            .await;
        return Err(e.into());
    }

    let registration = Registration {
        name: req.name,
        email: req.email,
        phone: req.phone,
    };

    let event = state.service_context.content
        .register_for_event(&id, registration)
        .await?;

    Ok(json_or_no_content(event))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<Event>)> {
    req.validate()?;

    let event = state.service_context.content.add_event(req.into()).await?;

    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateEventRequest>,
) -> Result<Response> {
    req.validate()?;

    let event = state.service_context.content.update_event(&id, req.into()).await?;
    Ok(json_or_no_content(event))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.service_context.content.delete_event(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
