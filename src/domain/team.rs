use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// A person shown on the public "Our Team" page
///
/// Ordered by `display_order` ascending; soft-deleted members are hidden
/// everywhere.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: Uuid,
    pub name: String,
    /// Role shown under the name, e.g. "Chief Medical Officer"
    pub role_title: String,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A company value card shown on the "Our Team" page
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamValue {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Icon identifier resolved by the frontend
    pub icon: Option<String>,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}
