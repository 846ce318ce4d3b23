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
use crate::domain::repositories::{TeamMemberRepository, TeamValueRepository};
use crate::domain::team::{TeamMember, TeamValue};
use crate::infrastructure::repositories::{
    PostgresTeamMemberRepository, PostgresTeamValueRepository,
};
use crate::state::AppState;

/// Request body for creating a team member
#[derive(Debug, Deserialize)]
pub struct CreateMemberRequest {
    pub name: String,
    pub role_title: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub display_order: Option<i32>,
}

/// Request body for updating a team member
#[derive(Debug, Deserialize)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub role_title: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub display_order: Option<i32>,
}

/// Request body for creating a team value card
#[derive(Debug, Deserialize)]
pub struct CreateValueRequest {
    pub title: String,
    pub description: String,
    pub icon: Option<String>,
    pub display_order: Option<i32>,
}

/// Request body for updating a team value card
#[derive(Debug, Deserialize)]
pub struct UpdateValueRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub display_order: Option<i32>,
}

/// List team members for the public team page
///
/// GET /team/members
pub async fn list_members(
    State(state): State<AppState>,
) -> Result<Json<Vec<TeamMember>>, ApiError> {
    let member_repo = PostgresTeamMemberRepository::new(state.pool.clone());
    let members = member_repo
        .list()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(members))
}

/// Create a team member
///
/// POST /team/members
pub async fn create_member(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Json(req): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<TeamMember>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("Name cannot be empty"));
    }
    if req.role_title.trim().is_empty() {
        return Err(ApiError::bad_request("Role title cannot be empty"));
    }

    let now = Utc::now();
    let member = TeamMember {
        id: Uuid::new_v4(),
        name: req.name.trim().to_string(),
        role_title: req.role_title.trim().to_string(),
        bio: req.bio,
        photo_url: req.photo_url,
        display_order: req.display_order.unwrap_or(0),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    };

    let member_repo = PostgresTeamMemberRepository::new(state.pool.clone());
    member_repo.create(&member).await.map_err(|e| {
        ApiError::internal_server_error(format!("Failed to create team member: {}", e))
    })?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// Update a team member
///
/// PUT /team/members/:id
pub async fn update_member(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMemberRequest>,
) -> Result<Json<TeamMember>, ApiError> {
    let member_repo = PostgresTeamMemberRepository::new(state.pool.clone());
    let mut member = member_repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Team member not found: {}", id)))?;

    if let Some(name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::bad_request("Name cannot be empty"));
        }
        member.name = name.trim().to_string();
    }
    if let Some(role_title) = req.role_title {
        if role_title.trim().is_empty() {
            return Err(ApiError::bad_request("Role title cannot be empty"));
        }
        member.role_title = role_title.trim().to_string();
    }
    if req.bio.is_some() {
        member.bio = req.bio;
    }
    if req.photo_url.is_some() {
        member.photo_url = req.photo_url;
    }
    if let Some(display_order) = req.display_order {
        member.display_order = display_order;
    }

    member_repo.update(&member).await.map_err(|e| {
        ApiError::internal_server_error(format!("Failed to update team member: {}", e))
    })?;

    Ok(Json(member))
}

/// Soft-delete a team member
///
/// DELETE /team/members/:id
pub async fn delete_member(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let member_repo = PostgresTeamMemberRepository::new(state.pool.clone());
    let deleted = member_repo.soft_delete(id).await.map_err(|e| {
        ApiError::internal_server_error(format!("Failed to delete team member: {}", e))
    })?;

    if !deleted {
        return Err(ApiError::not_found(format!("Team member not found: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List company values for the public team page
///
/// GET /team/values
pub async fn list_values(State(state): State<AppState>) -> Result<Json<Vec<TeamValue>>, ApiError> {
    let value_repo = PostgresTeamValueRepository::new(state.pool.clone());
    let values = value_repo
        .list()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(values))
}

/// Create a team value card
///
/// POST /team/values
pub async fn create_value(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Json(req): Json<CreateValueRequest>,
) -> Result<(StatusCode, Json<TeamValue>), ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title cannot be empty"));
    }
    if req.description.trim().is_empty() {
        return Err(ApiError::bad_request("Description cannot be empty"));
    }

    let now = Utc::now();
    let value = TeamValue {
        id: Uuid::new_v4(),
        title: req.title.trim().to_string(),
        description: req.description.trim().to_string(),
        icon: req.icon,
        display_order: req.display_order.unwrap_or(0),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    };

    let value_repo = PostgresTeamValueRepository::new(state.pool.clone());
    value_repo.create(&value).await.map_err(|e| {
        ApiError::internal_server_error(format!("Failed to create team value: {}", e))
    })?;

    Ok((StatusCode::CREATED, Json(value)))
}

/// Update a team value card
///
/// PUT /team/values/:id
pub async fn update_value(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateValueRequest>,
) -> Result<Json<TeamValue>, ApiError> {
    let value_repo = PostgresTeamValueRepository::new(state.pool.clone());
    let mut value = value_repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Team value not found: {}", id)))?;

    if let Some(title) = req.title {
        if title.trim().is_empty() {
            return Err(ApiError::bad_request("Title cannot be empty"));
        }
        value.title = title.trim().to_string();
    }
    if let Some(description) = req.description {
        if description.trim().is_empty() {
            return Err(ApiError::bad_request("Description cannot be empty"));
        }
        value.description = description.trim().to_string();
    }
    if req.icon.is_some() {
        value.icon = req.icon;
    }
    if let Some(display_order) = req.display_order {
        value.display_order = display_order;
    }

    value_repo.update(&value).await.map_err(|e| {
        ApiError::internal_server_error(format!("Failed to update team value: {}", e))
    })?;

    Ok(Json(value))
}

/// Soft-delete a team value card
///
/// DELETE /team/values/:id
pub async fn delete_value(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let value_repo = PostgresTeamValueRepository::new(state.pool.clone());
    let deleted = value_repo.soft_delete(id).await.map_err(|e| {
        ApiError::internal_server_error(format!("Failed to delete team value: {}", e))
    })?;

    if !deleted {
        return Err(ApiError::not_found(format!("Team value not found: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
