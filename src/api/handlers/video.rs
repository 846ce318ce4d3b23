use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::domain::repositories::VideoRepository;
use crate::domain::video::Video;
use crate::infrastructure::repositories::PostgresVideoRepository;
use crate::state::AppState;

/// Request body for creating a video link
#[derive(Debug, Deserialize)]
pub struct CreateVideoRequest {
    pub title: String,
    pub url: String,
    pub description: Option<String>,
    pub display_order: Option<i32>,
    pub is_published: Option<bool>,
}

/// Request body for updating a video link
#[derive(Debug, Deserialize)]
pub struct UpdateVideoRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub display_order: Option<i32>,
    pub is_published: Option<bool>,
}

/// Checks that the embed URL looks like an http(s) URL
fn validate_video_url(url: &str) -> Result<(), ApiError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ApiError::bad_request("URL must start with http:// or https://"));
    }
    Ok(())
}

/// List published videos for the public page
///
/// GET /video
pub async fn list_published_videos(
    State(state): State<AppState>,
) -> Result<Json<Vec<Video>>, ApiError> {
    let video_repo = PostgresVideoRepository::new(state.pool.clone());
    let videos = video_repo
        .list_published()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(videos))
}

/// List all videos for the admin table
///
/// GET /video/all
pub async fn list_all_videos(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
) -> Result<Json<Vec<Video>>, ApiError> {
    let video_repo = PostgresVideoRepository::new(state.pool.clone());
    let videos = video_repo
        .list_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(videos))
}

/// Create a video link
///
/// POST /video
pub async fn create_video(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Json(req): Json<CreateVideoRequest>,
) -> Result<(StatusCode, Json<Video>), ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title cannot be empty"));
    }
    validate_video_url(&req.url)?;

    let now = Utc::now();
    let video = Video {
        id: Uuid::new_v4(),
        title: req.title.trim().to_string(),
        url: req.url,
        description: req.description,
        display_order: req.display_order.unwrap_or(0),
        is_published: req.is_published.unwrap_or(false),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    };

    let video_repo = PostgresVideoRepository::new(state.pool.clone());
    video_repo
        .create(&video)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create video: {}", e)))?;

    Ok((StatusCode::CREATED, Json(video)))
}

/// Update a video link
///
/// PUT /video/:id
pub async fn update_video(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateVideoRequest>,
) -> Result<Json<Video>, ApiError> {
    let video_repo = PostgresVideoRepository::new(state.pool.clone());
    let mut video = video_repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Video not found: {}", id)))?;

    if let Some(title) = req.title {
        if title.trim().is_empty() {
            return Err(ApiError::bad_request("Title cannot be empty"));
        }
        video.title = title.trim().to_string();
    }
    if let Some(url) = req.url {
        validate_video_url(&url)?;
        video.url = url;
    }
    if req.description.is_some() {
        video.description = req.description;
    }
    if let Some(display_order) = req.display_order {
        video.display_order = display_order;
    }
    if let Some(is_published) = req.is_published {
        video.is_published = is_published;
    }

    video_repo
        .update(&video)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to update video: {}", e)))?;

    Ok(Json(video))
}

/// Soft-delete a video link
///
/// DELETE /video/:id
pub async fn delete_video(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let video_repo = PostgresVideoRepository::new(state.pool.clone());
    let deleted = video_repo
        .soft_delete(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete video: {}", e)))?;

    if !deleted {
        return Err(ApiError::not_found(format!("Video not found: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
