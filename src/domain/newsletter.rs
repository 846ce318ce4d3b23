use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A newsletter subscriber
///
/// Emails are unique. Unsubscribing flips `is_active` and stamps
/// `unsubscribed_at` rather than deleting the row, so a returning
/// subscriber keeps their original `subscribed_at`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Subscriber {
    pub id: Uuid,
    pub email: String,
    pub is_active: bool,
    pub subscribed_at: DateTime<Utc>,
    pub unsubscribed_at: Option<DateTime<Utc>>,
}
