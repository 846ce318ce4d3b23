use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Triage status of a contact inquiry
///
/// # Status Transitions
/// ```text
/// New -> InProgress -> Resolved
///   \________________/
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "inquiry_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    /// Just submitted, nobody has looked at it
    New,
    /// An admin is handling it
    InProgress,
    /// Answered or closed
    Resolved,
}

impl InquiryStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// # Valid Transitions
    /// - New -> InProgress
    /// - New -> Resolved (trivial inquiries get closed directly)
    /// - InProgress -> Resolved
    /// - Resolved -> InProgress (reopen)
    pub fn can_transition_to(&self, next: InquiryStatus) -> bool {
        use InquiryStatus::*;
        matches!(
            (self, next),
            (New, InProgress) | (New, Resolved) | (InProgress, Resolved) | (Resolved, InProgress)
        )
    }
}

impl std::fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InquiryStatus::New => write!(f, "new"),
            InquiryStatus::InProgress => write!(f, "in_progress"),
            InquiryStatus::Resolved => write!(f, "resolved"),
        }
    }
}

/// A message submitted through the public contact form
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactInquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transition_new_to_in_progress() {
        assert!(InquiryStatus::New.can_transition_to(InquiryStatus::InProgress));
    }

    #[test]
    fn valid_transition_new_to_resolved() {
        assert!(InquiryStatus::New.can_transition_to(InquiryStatus::Resolved));
    }

    #[test]
    fn valid_transition_reopen() {
        assert!(InquiryStatus::Resolved.can_transition_to(InquiryStatus::InProgress));
    }

    #[test]
    fn invalid_transition_to_same_status() {
        assert!(!InquiryStatus::New.can_transition_to(InquiryStatus::New));
        assert!(!InquiryStatus::Resolved.can_transition_to(InquiryStatus::Resolved));
    }

    #[test]
    fn invalid_transition_in_progress_to_new() {
        assert!(!InquiryStatus::InProgress.can_transition_to(InquiryStatus::New));
    }

    #[test]
    fn status_display() {
        assert_eq!(InquiryStatus::New.to_string(), "new");
        assert_eq!(InquiryStatus::InProgress.to_string(), "in_progress");
        assert_eq!(InquiryStatus::Resolved.to_string(), "resolved");
    }
}
