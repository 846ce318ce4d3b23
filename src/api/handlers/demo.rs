use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::domain::demo::{AvailabilitySlot, DemoInterest, DemoRequest, DemoRequestStatus};
use crate::domain::repositories::{
    AvailabilitySlotRepository, DemoInterestRepository, DemoRequestRepository,
};
use crate::domain::value_objects::{Email, Slug};
use crate::infrastructure::repositories::{
    PostgresAvailabilitySlotRepository, PostgresDemoInterestRepository,
    PostgresDemoRequestRepository,
};
use crate::state::AppState;

/// Request body for the public demo form
#[derive(Debug, Deserialize)]
pub struct CreateDemoRequestBody {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub interest_id: Uuid,
    /// Calendar slot the prospect picked, if any
    pub slot_id: Option<Uuid>,
}

/// Query parameters for the admin demo-request list
#[derive(Debug, Deserialize)]
pub struct ListRequestsParams {
    pub status: Option<DemoRequestStatus>,
}

/// Request body for updating a demo request's status
#[derive(Debug, Deserialize)]
pub struct UpdateRequestStatusRequest {
    pub status: DemoRequestStatus,
}

/// Request body for creating an availability slot
#[derive(Debug, Deserialize)]
pub struct CreateSlotRequest {
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub capacity: Option<i32>,
    pub is_open: Option<bool>,
}

/// Request body for updating an availability slot
#[derive(Debug, Deserialize)]
pub struct UpdateSlotRequest {
    pub starts_at: Option<DateTime<Utc>>,
    pub ends_at: Option<DateTime<Utc>>,
    pub capacity: Option<i32>,
    pub is_open: Option<bool>,
}

/// Request body for creating a demo interest option
#[derive(Debug, Deserialize)]
pub struct CreateInterestRequest {
    pub label: String,
    pub slug: Option<String>,
}

/// List interest options for the public demo form
///
/// GET /demo/interests
pub async fn list_interests(
    State(state): State<AppState>,
) -> Result<Json<Vec<DemoInterest>>, ApiError> {
    let interest_repo = PostgresDemoInterestRepository::new(state.pool.clone());
    let interests = interest_repo
        .list()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(interests))
}

/// List open future slots with remaining capacity
///
/// GET /demo/slots
pub async fn list_open_slots(
    State(state): State<AppState>,
) -> Result<Json<Vec<AvailabilitySlot>>, ApiError> {
    let slot_repo = PostgresAvailabilitySlotRepository::new(state.pool.clone());
    let slots = slot_repo
        .list_open()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(slots))
}

/// Submit a demo request
///
/// POST /demo/requests
///
/// When the prospect picked a calendar slot the seat is booked first; a
/// full or stale slot turns into a 409 so the form can refresh its slot
/// list. Confirmation and sales-notification emails are best effort.
pub async fn create_request(
    State(state): State<AppState>,
    Json(req): Json<CreateDemoRequestBody>,
) -> Result<(StatusCode, Json<DemoRequest>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("Name cannot be empty"));
    }

    let email = Email::new(&req.email)
        .map_err(|e| ApiError::bad_request(format!("Invalid email: {}", e)))?;

    // Interest must exist
    let interest_repo = PostgresDemoInterestRepository::new(state.pool.clone());
    let interest = interest_repo
        .find_by_id(req.interest_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::bad_request(format!("Unknown interest: {}", req.interest_id)))?;

    // Book the slot before persisting the request
    let slot_repo = PostgresAvailabilitySlotRepository::new(state.pool.clone());
    let mut booked_slot = None;
    if let Some(slot_id) = req.slot_id {
        let slot = slot_repo
            .find_by_id(slot_id)
            .await
            .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
            .ok_or_else(|| ApiError::bad_request(format!("Unknown slot: {}", slot_id)))?;

        let booked = slot_repo
            .book(slot_id)
            .await
            .map_err(|e| ApiError::internal_server_error(format!("Failed to book slot: {}", e)))?;

        if !booked {
            return Err(ApiError::conflict("Slot is no longer available"));
        }
        booked_slot = Some(slot);
    }

    let status = if booked_slot.is_some() {
        DemoRequestStatus::Scheduled
    } else {
        DemoRequestStatus::Pending
    };

    let now = Utc::now();
    let request = DemoRequest {
        id: Uuid::new_v4(),
        name: req.name.trim().to_string(),
        email: email.to_string(),
        company: req.company,
        phone: req.phone,
        message: req.message,
        interest_id: req.interest_id,
        slot_id: req.slot_id,
        status,
        created_at: now,
        updated_at: now,
    };

    let request_repo = PostgresDemoRequestRepository::new(state.pool.clone());
    if let Err(e) = request_repo.create(&request).await {
        // Give the seat back before reporting the failure
        if let Some(slot) = &booked_slot {
            let _ = slot_repo.release(slot.id).await;
        }
        return Err(ApiError::internal_server_error(format!(
            "Failed to save demo request: {}",
            e
        )));
    }

    // Emails are best effort; the request is persisted either way
    if let Some(mailer) = &state.mailer {
        let slot_window = booked_slot.as_ref().map(|s| (s.starts_at, s.ends_at));

        if let Err(e) = mailer
            .send_demo_confirmation(email.as_str(), &request.name, &interest.label, slot_window)
            .await
        {
            tracing::warn!(error = %e, "Failed to send demo confirmation");
        }

        if let Some(sales_email) = &state.config.sales_email {
            if let Err(e) = mailer
                .send_demo_sales_notification(
                    sales_email,
                    &request.name,
                    email.as_str(),
                    request.company.as_deref(),
                    &interest.label,
                    slot_window,
                    request.message.as_deref(),
                )
                .await
            {
                tracing::warn!(error = %e, "Failed to send sales notification");
            }
        }
    } else {
        tracing::debug!("SMTP not configured, skipping demo emails");
    }

    Ok((StatusCode::CREATED, Json(request)))
}

/// List demo requests, optionally filtered by status
///
/// GET /demo/requests
pub async fn list_requests(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Query(params): Query<ListRequestsParams>,
) -> Result<Json<Vec<DemoRequest>>, ApiError> {
    let request_repo = PostgresDemoRequestRepository::new(state.pool.clone());
    let requests = request_repo
        .list(params.status)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(requests))
}

/// Update a demo request's status
///
/// PUT /demo/requests/:id/status
///
/// Cancelling a request with a booked slot releases the seat.
pub async fn update_request_status(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRequestStatusRequest>,
) -> Result<Json<DemoRequest>, ApiError> {
    let request_repo = PostgresDemoRequestRepository::new(state.pool.clone());
    let mut request = request_repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Demo request not found: {}", id)))?;

    if !request.status.can_transition_to(req.status) {
        return Err(ApiError::bad_request(format!(
            "Invalid status transition from {} to {}",
            request.status, req.status
        )));
    }

    request_repo
        .update_status(id, req.status)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to update status: {}", e)))?;

    if req.status == DemoRequestStatus::Cancelled {
        if let Some(slot_id) = request.slot_id {
            let slot_repo = PostgresAvailabilitySlotRepository::new(state.pool.clone());
            if let Err(e) = slot_repo.release(slot_id).await {
                tracing::warn!(error = %e, slot_id = %slot_id, "Failed to release slot");
            }
        }
    }

    request.status = req.status;
    Ok(Json(request))
}

/// List all slots for the admin calendar
///
/// GET /demo/admin/slots
pub async fn list_all_slots(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
) -> Result<Json<Vec<AvailabilitySlot>>, ApiError> {
    let slot_repo = PostgresAvailabilitySlotRepository::new(state.pool.clone());
    let slots = slot_repo
        .list_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(slots))
}

/// Create an availability slot
///
/// POST /demo/slots
pub async fn create_slot(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Json(req): Json<CreateSlotRequest>,
) -> Result<(StatusCode, Json<AvailabilitySlot>), ApiError> {
    if req.starts_at >= req.ends_at {
        return Err(ApiError::bad_request("Slot must start before it ends"));
    }
    let capacity = req.capacity.unwrap_or(1);
    if capacity < 1 {
        return Err(ApiError::bad_request("Capacity must be at least 1"));
    }

    let now = Utc::now();
    let slot = AvailabilitySlot {
        id: Uuid::new_v4(),
        starts_at: req.starts_at,
        ends_at: req.ends_at,
        capacity,
        booked_count: 0,
        is_open: req.is_open.unwrap_or(true),
        created_at: now,
        updated_at: now,
    };

    let slot_repo = PostgresAvailabilitySlotRepository::new(state.pool.clone());
    slot_repo
        .create(&slot)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create slot: {}", e)))?;

    Ok((StatusCode::CREATED, Json(slot)))
}

/// Update an availability slot
///
/// PUT /demo/slots/:id
pub async fn update_slot(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateSlotRequest>,
) -> Result<Json<AvailabilitySlot>, ApiError> {
    let slot_repo = PostgresAvailabilitySlotRepository::new(state.pool.clone());
    let mut slot = slot_repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Slot not found: {}", id)))?;

    if let Some(starts_at) = req.starts_at {
        slot.starts_at = starts_at;
    }
    if let Some(ends_at) = req.ends_at {
        slot.ends_at = ends_at;
    }
    if slot.starts_at >= slot.ends_at {
        return Err(ApiError::bad_request("Slot must start before it ends"));
    }
    if let Some(capacity) = req.capacity {
        if capacity < 1 {
            return Err(ApiError::bad_request("Capacity must be at least 1"));
        }
        if capacity < slot.booked_count {
            return Err(ApiError::bad_request(format!(
                "Capacity cannot drop below booked count ({})",
                slot.booked_count
            )));
        }
        slot.capacity = capacity;
    }
    if let Some(is_open) = req.is_open {
        slot.is_open = is_open;
    }

    slot_repo
        .update(&slot)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to update slot: {}", e)))?;

    Ok(Json(slot))
}

/// Delete an availability slot
///
/// DELETE /demo/slots/:id
pub async fn delete_slot(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let slot_repo = PostgresAvailabilitySlotRepository::new(state.pool.clone());
    let deleted = slot_repo.delete(id).await.map_err(|e| {
        if e.contains("foreign key") {
            ApiError::conflict("Slot has demo requests and cannot be deleted")
        } else {
            ApiError::internal_server_error(format!("Failed to delete slot: {}", e))
        }
    })?;

    if !deleted {
        return Err(ApiError::not_found(format!("Slot not found: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// Create a demo interest option
///
/// POST /demo/interests
pub async fn create_interest(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Json(req): Json<CreateInterestRequest>,
) -> Result<(StatusCode, Json<DemoInterest>), ApiError> {
    if req.label.trim().is_empty() {
        return Err(ApiError::bad_request("Label cannot be empty"));
    }

    let slug = match req.slug.as_deref() {
        Some(slug) => {
            Slug::new(slug).map_err(|e| ApiError::bad_request(format!("Invalid slug: {}", e)))?
        }
        None => Slug::from_title(&req.label)
            .map_err(|e| ApiError::bad_request(format!("Cannot derive slug: {}", e)))?,
    };

    let interest = DemoInterest {
        id: Uuid::new_v4(),
        label: req.label.trim().to_string(),
        slug: slug.to_string(),
        created_at: Utc::now(),
    };

    let interest_repo = PostgresDemoInterestRepository::new(state.pool.clone());
    interest_repo.create(&interest).await.map_err(|e| {
        if e.contains("duplicate") || e.contains("unique") {
            ApiError::conflict(format!("Slug already in use: {}", interest.slug))
        } else {
            ApiError::internal_server_error(format!("Failed to create interest: {}", e))
        }
    })?;

    Ok((StatusCode::CREATED, Json(interest)))
}

/// Delete a demo interest option
///
/// DELETE /demo/interests/:id
pub async fn delete_interest(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let interest_repo = PostgresDemoInterestRepository::new(state.pool.clone());
    let deleted = interest_repo.delete(id).await.map_err(|e| {
        if e.contains("foreign key") {
            ApiError::conflict("Interest has demo requests and cannot be deleted")
        } else {
            ApiError::internal_server_error(format!("Failed to delete interest: {}", e))
        }
    })?;

    if !deleted {
        return Err(ApiError::not_found(format!("Interest not found: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
