use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle status of a demo request
///
/// # Status Transitions
/// ```text
/// Pending -> Scheduled -> Completed
///     \          |
///      +---------+-----> Cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "demo_request_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DemoRequestStatus {
    /// Submitted, sales has not reached out yet
    Pending,
    /// A call is on the calendar
    Scheduled,
    /// The demo happened
    Completed,
    /// Prospect or sales cancelled
    Cancelled,
}

impl DemoRequestStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// # Valid Transitions
    /// - Pending -> Scheduled
    /// - Pending -> Cancelled
    /// - Scheduled -> Completed
    /// - Scheduled -> Cancelled
    pub fn can_transition_to(&self, next: DemoRequestStatus) -> bool {
        use DemoRequestStatus::*;
        matches!(
            (self, next),
            (Pending, Scheduled)
                | (Pending, Cancelled)
                | (Scheduled, Completed)
                | (Scheduled, Cancelled)
        )
    }
}

impl std::fmt::Display for DemoRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DemoRequestStatus::Pending => write!(f, "pending"),
            DemoRequestStatus::Scheduled => write!(f, "scheduled"),
            DemoRequestStatus::Completed => write!(f, "completed"),
            DemoRequestStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A product area a prospect can pick on the demo form
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DemoInterest {
    pub id: Uuid,
    pub label: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// A bookable calendar window for demo calls
///
/// # Invariants
/// - `starts_at < ends_at`
/// - `0 <= booked_count <= capacity`
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AvailabilitySlot {
    pub id: Uuid,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    pub capacity: i32,
    pub booked_count: i32,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AvailabilitySlot {
    /// Remaining bookable seats in this slot
    pub fn remaining(&self) -> i32 {
        (self.capacity - self.booked_count).max(0)
    }
}

/// A lead-capture record for a prospective customer's demo request
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DemoRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub interest_id: Uuid,
    /// Booked calendar slot, when the prospect picked one
    pub slot_id: Option<Uuid>,
    pub status: DemoRequestStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transition_pending_to_scheduled() {
        assert!(DemoRequestStatus::Pending.can_transition_to(DemoRequestStatus::Scheduled));
    }

    #[test]
    fn valid_transition_scheduled_to_completed() {
        assert!(DemoRequestStatus::Scheduled.can_transition_to(DemoRequestStatus::Completed));
    }

    #[test]
    fn valid_transition_cancellations() {
        assert!(DemoRequestStatus::Pending.can_transition_to(DemoRequestStatus::Cancelled));
        assert!(DemoRequestStatus::Scheduled.can_transition_to(DemoRequestStatus::Cancelled));
    }

    #[test]
    fn invalid_transition_pending_to_completed() {
        assert!(!DemoRequestStatus::Pending.can_transition_to(DemoRequestStatus::Completed));
    }

    #[test]
    fn invalid_transition_completed_to_anything() {
        assert!(!DemoRequestStatus::Completed.can_transition_to(DemoRequestStatus::Scheduled));
        assert!(!DemoRequestStatus::Completed.can_transition_to(DemoRequestStatus::Cancelled));
    }

    #[test]
    fn invalid_transition_cancelled_to_anything() {
        assert!(!DemoRequestStatus::Cancelled.can_transition_to(DemoRequestStatus::Pending));
        assert!(!DemoRequestStatus::Cancelled.can_transition_to(DemoRequestStatus::Scheduled));
    }

    #[test]
    fn status_display() {
        assert_eq!(DemoRequestStatus::Pending.to_string(), "pending");
        assert_eq!(DemoRequestStatus::Scheduled.to_string(), "scheduled");
        assert_eq!(DemoRequestStatus::Completed.to_string(), "completed");
        assert_eq!(DemoRequestStatus::Cancelled.to_string(), "cancelled");
    }

    #[test]
    fn slot_remaining_never_negative() {
        let slot = AvailabilitySlot {
            id: Uuid::new_v4(),
            starts_at: Utc::now(),
            ends_at: Utc::now(),
            capacity: 2,
            booked_count: 3,
            is_open: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(slot.remaining(), 0);
    }
}
