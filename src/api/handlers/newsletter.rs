use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::domain::newsletter::Subscriber;
use crate::domain::repositories::{NewsletterRepository, SubscribeOutcome};
use crate::domain::value_objects::Email;
use crate::infrastructure::repositories::PostgresNewsletterRepository;
use crate::state::AppState;

/// Request body for subscribe/unsubscribe
#[derive(Debug, Deserialize)]
pub struct SubscriptionRequest {
    pub email: String,
}

/// Response from a subscribe call
#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub message: String,
}

/// Subscribe an email to the newsletter
///
/// POST /newsletter/subscribe
///
/// Idempotent: an already-active email gets a friendly 200; a previously
/// unsubscribed email is re-activated. The welcome email only goes out on
/// the first subscription.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(req): Json<SubscriptionRequest>,
) -> Result<(StatusCode, Json<SubscribeResponse>), ApiError> {
    let email = Email::new(&req.email)
        .map_err(|e| ApiError::bad_request(format!("Invalid email: {}", e)))?;

    let newsletter_repo = PostgresNewsletterRepository::new(state.pool.clone());
    let (_, outcome) = newsletter_repo
        .subscribe(&email)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to subscribe: {}", e)))?;

    let (status, message) = match outcome {
        SubscribeOutcome::Created => {
            // Welcome email is best effort
            if let Some(mailer) = &state.mailer {
                if let Err(e) = mailer.send_newsletter_welcome(email.as_str()).await {
                    tracing::warn!(error = %e, "Failed to send newsletter welcome");
                }
            }
            (StatusCode::CREATED, "Subscribed, welcome aboard")
        }
        SubscribeOutcome::Reactivated => (StatusCode::OK, "Subscription re-activated"),
        SubscribeOutcome::AlreadySubscribed => (StatusCode::OK, "Already subscribed"),
    };

    Ok((
        status,
        Json(SubscribeResponse {
            message: message.to_string(),
        }),
    ))
}

/// Unsubscribe an email from the newsletter
///
/// POST /newsletter/unsubscribe
pub async fn unsubscribe(
    State(state): State<AppState>,
    Json(req): Json<SubscriptionRequest>,
) -> Result<Json<SubscribeResponse>, ApiError> {
    let email = Email::new(&req.email)
        .map_err(|e| ApiError::bad_request(format!("Invalid email: {}", e)))?;

    let newsletter_repo = PostgresNewsletterRepository::new(state.pool.clone());
    let removed = newsletter_repo
        .unsubscribe(&email)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to unsubscribe: {}", e)))?;

    if !removed {
        return Err(ApiError::not_found("Email is not an active subscriber"));
    }

    Ok(Json(SubscribeResponse {
        message: "Unsubscribed".to_string(),
    }))
}

/// List all subscribers for the admin table
///
/// GET /newsletter/subscribers
pub async fn list_subscribers(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
) -> Result<Json<Vec<Subscriber>>, ApiError> {
    let newsletter_repo = PostgresNewsletterRepository::new(state.pool.clone());
    let subscribers = newsletter_repo
        .list()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(subscribers))
}
