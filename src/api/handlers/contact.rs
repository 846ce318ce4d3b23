use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::domain::contact::{ContactInquiry, InquiryStatus};
use crate::domain::repositories::ContactRepository;
use crate::domain::value_objects::Email;
use crate::infrastructure::repositories::PostgresContactRepository;
use crate::state::AppState;

/// Request body for the public contact form
#[derive(Debug, Deserialize)]
pub struct SubmitInquiryRequest {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Response from a successful contact-form submission
#[derive(Debug, Serialize)]
pub struct SubmitInquiryResponse {
    pub id: Uuid,
    pub message: String,
}

/// Query parameters for the admin inquiry list
#[derive(Debug, Deserialize)]
pub struct ListInquiriesParams {
    pub status: Option<InquiryStatus>,
}

/// Request body for updating an inquiry's status
#[derive(Debug, Deserialize)]
pub struct UpdateInquiryStatusRequest {
    pub status: InquiryStatus,
}

/// Submit a contact inquiry
///
/// POST /contact
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Json(req): Json<SubmitInquiryRequest>,
) -> Result<(StatusCode, Json<SubmitInquiryResponse>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("Name cannot be empty"));
    }
    if req.message.trim().is_empty() {
        return Err(ApiError::bad_request("Message cannot be empty"));
    }

    let email = Email::new(&req.email)
        .map_err(|e| ApiError::bad_request(format!("Invalid email: {}", e)))?;

    let now = Utc::now();
    let inquiry = ContactInquiry {
        id: Uuid::new_v4(),
        name: req.name.trim().to_string(),
        email: email.to_string(),
        subject: req.subject,
        message: req.message.trim().to_string(),
        status: InquiryStatus::New,
        created_at: now,
        updated_at: now,
    };

    let contact_repo = PostgresContactRepository::new(state.pool.clone());
    contact_repo.create(&inquiry).await.map_err(|e| {
        ApiError::internal_server_error(format!("Failed to save inquiry: {}", e))
    })?;

    // Acknowledge by email; the inquiry is saved either way
    if let Some(mailer) = &state.mailer {
        if let Err(e) = mailer
            .send_contact_acknowledgement(email.as_str(), &inquiry.name, &inquiry.message)
            .await
        {
            tracing::warn!(error = %e, "Failed to send contact acknowledgement");
        }
    } else {
        tracing::debug!("SMTP not configured, skipping contact acknowledgement");
    }

    Ok((
        StatusCode::CREATED,
        Json(SubmitInquiryResponse {
            id: inquiry.id,
            message: "Thanks, we will be in touch shortly".to_string(),
        }),
    ))
}

/// List inquiries, optionally filtered by status
///
/// GET /contact/inquiries
pub async fn list_inquiries(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Query(params): Query<ListInquiriesParams>,
) -> Result<Json<Vec<ContactInquiry>>, ApiError> {
    let contact_repo = PostgresContactRepository::new(state.pool.clone());
    let inquiries = contact_repo
        .list(params.status)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(inquiries))
}

/// Update an inquiry's triage status
///
/// PUT /contact/inquiries/:id/status
pub async fn update_inquiry_status(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateInquiryStatusRequest>,
) -> Result<Json<ContactInquiry>, ApiError> {
    let contact_repo = PostgresContactRepository::new(state.pool.clone());
    let mut inquiry = contact_repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Inquiry not found: {}", id)))?;

    if !inquiry.status.can_transition_to(req.status) {
        return Err(ApiError::bad_request(format!(
            "Invalid status transition from {} to {}",
            inquiry.status, req.status
        )));
    }

    contact_repo
        .update_status(id, req.status)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to update status: {}", e)))?;

    inquiry.status = req.status;
    Ok(Json(inquiry))
}
