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
    domain::{BlogPost, BlogPostPatch, NewBlogPost},
    error::{AppError, Result},
};

#[derive(Debug, Deserialize)]
pub struct ListBlogsQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    /// When set, return only the newest `latest` posts.
    pub latest: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateBlogPostRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    #[validate(length(min = 1, message = "Excerpt is required"))]
    pub excerpt: String,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: String,
    #[validate(custom(function = "validate_iso_date"))]
    pub date: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: String,
    #[serde(default)]
    pub image: String,
}

impl From<CreateBlogPostRequest> for NewBlogPost {
    fn from(req: CreateBlogPostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            excerpt: req.excerpt,
            author: req.author,
            date: req.date,
            category: req.category,
            image: req.image,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateBlogPostRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: Option<String>,
    #[validate(length(min = 1, message = "Excerpt is required"))]
    pub excerpt: Option<String>,
    #[validate(length(min = 1, message = "Author is required"))]
    pub author: Option<String>,
    #[validate(custom(function = "validate_iso_date"))]
    pub date: Option<String>,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category: Option<String>,
    pub image: Option<String>,
}

impl From<UpdateBlogPostRequest> for BlogPostPatch {
    fn from(req: UpdateBlogPostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            excerpt: req.excerpt,
            author: req.author,
            date: req.date,
            category: req.category,
            image: req.image,
        }
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListBlogsQuery>,
) -> Result<Json<Vec<BlogPost>>> {
    let content = &state.service_context.content;

    let posts = match params.latest {
        Some(limit) => content.latest_blog_posts(limit).await?,
        None => content
            .search_blog_posts(params.category.as_deref(), params.q.as_deref())
            .await?,
    };

    Ok(Json(posts))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BlogPost>> {
    let post = state.service_context.content
        .find_blog_post(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Blog post not found".to_string()))?;

    Ok(Json(post))
}

pub async fn related(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<RelatedQuery>,
) -> Result<Json<Vec<BlogPost>>> {
    let posts = state.service_context.content
        .related_blog_posts(&id, params.limit.unwrap_or(3))
        .await?;

    Ok(Json(posts))
}

pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<CreateBlogPostRequest>,
) -> Result<(StatusCode, Json<BlogPost>)> {
    req.validate()?;

    let post = state.service_context.content.add_blog_post(req.into()).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateBlogPostRequest>,
) -> Result<Response> {
    req.validate()?;

    let post = state.service_context.content.update_blog_post(&id, req.into()).await?;
    Ok(json_or_no_content(post))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    state.service_context.content.delete_blog_post(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
