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
use crate::domain::partner::Partner;
use crate::domain::repositories::PartnerRepository;
use crate::infrastructure::repositories::PostgresPartnerRepository;
use crate::state::AppState;

/// Request body for creating a partner
#[derive(Debug, Deserialize)]
pub struct CreatePartnerRequest {
    pub name: String,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// Request body for updating a partner
#[derive(Debug, Deserialize)]
pub struct UpdatePartnerRequest {
    pub name: Option<String>,
    pub logo_url: Option<String>,
    pub website_url: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}

/// List active partners for the public strip
///
/// GET /partners
pub async fn list_active_partners(
    State(state): State<AppState>,
) -> Result<Json<Vec<Partner>>, ApiError> {
    let partner_repo = PostgresPartnerRepository::new(state.pool.clone());
    let partners = partner_repo
        .list_active()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(partners))
}

/// List all partners for the admin table
///
/// GET /partners/all
pub async fn list_all_partners(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
) -> Result<Json<Vec<Partner>>, ApiError> {
    let partner_repo = PostgresPartnerRepository::new(state.pool.clone());
    let partners = partner_repo
        .list_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(partners))
}

/// Create a partner
///
/// POST /partners
pub async fn create_partner(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Json(req): Json<CreatePartnerRequest>,
) -> Result<(StatusCode, Json<Partner>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("Name cannot be empty"));
    }

    let now = Utc::now();
    let partner = Partner {
        id: Uuid::new_v4(),
        name: req.name.trim().to_string(),
        logo_url: req.logo_url,
        website_url: req.website_url,
        display_order: req.display_order.unwrap_or(0),
        is_active: req.is_active.unwrap_or(true),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    };

    let partner_repo = PostgresPartnerRepository::new(state.pool.clone());
    partner_repo
        .create(&partner)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create partner: {}", e)))?;

    Ok((StatusCode::CREATED, Json(partner)))
}

/// Update a partner
///
/// PUT /partners/:id
pub async fn update_partner(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePartnerRequest>,
) -> Result<Json<Partner>, ApiError> {
    let partner_repo = PostgresPartnerRepository::new(state.pool.clone());
    let mut partner = partner_repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Partner not found: {}", id)))?;

    if let Some(name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::bad_request("Name cannot be empty"));
        }
        partner.name = name.trim().to_string();
    }
    if req.logo_url.is_some() {
        partner.logo_url = req.logo_url;
    }
    if req.website_url.is_some() {
        partner.website_url = req.website_url;
    }
    if let Some(display_order) = req.display_order {
        partner.display_order = display_order;
    }
    if let Some(is_active) = req.is_active {
        partner.is_active = is_active;
    }

    partner_repo
        .update(&partner)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to update partner: {}", e)))?;

    Ok(Json(partner))
}

/// Soft-delete a partner
///
/// DELETE /partners/:id
pub async fn delete_partner(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let partner_repo = PostgresPartnerRepository::new(state.pool.clone());
    let deleted = partner_repo
        .soft_delete(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete partner: {}", e)))?;

    if !deleted {
        return Err(ApiError::not_found(format!("Partner not found: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
