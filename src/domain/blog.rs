use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Publication status of a blog post
///
/// # Status Transitions
/// ```text
/// Draft -> Published -> Archived
///   ^          |
///   +----------+  (unpublish back to draft)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "post_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Not visible on the public site
    Draft,
    /// Live on the public blog
    Published,
    /// Removed from the public blog but kept for reference
    Archived,
}

impl PostStatus {
    /// Checks if a transition from current status to next status is valid
    ///
    /// # Valid Transitions
    /// - Draft -> Published
    /// - Published -> Draft (unpublish)
    /// - Published -> Archived
    /// - Archived -> Draft (restore for editing)
    pub fn can_transition_to(&self, next: PostStatus) -> bool {
        use PostStatus::*;
        matches!(
            (self, next),
            (Draft, Published) | (Published, Draft) | (Published, Archived) | (Archived, Draft)
        )
    }
}

impl std::fmt::Display for PostStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostStatus::Draft => write!(f, "draft"),
            PostStatus::Published => write!(f, "published"),
            PostStatus::Archived => write!(f, "archived"),
        }
    }
}

/// A blog post author shown in article bylines
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    /// Job title shown under the byline
    pub title: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A blog category used to group posts
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub created_at: DateTime<Utc>,
}

/// A blog post record
///
/// `view_count` is never negative; `published_at` is set the first time
/// the post transitions to `Published`. Soft-deleted posts carry a
/// `deleted_at` timestamp and are excluded from all queries.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub body: String,
    pub cover_image_url: Option<String>,
    pub author_id: Uuid,
    pub category_id: Uuid,
    pub status: PostStatus,
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    pub deleted_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transition_draft_to_published() {
        assert!(PostStatus::Draft.can_transition_to(PostStatus::Published));
    }

    #[test]
    fn valid_transition_published_to_archived() {
        assert!(PostStatus::Published.can_transition_to(PostStatus::Archived));
    }

    #[test]
    fn valid_transition_unpublish() {
        assert!(PostStatus::Published.can_transition_to(PostStatus::Draft));
    }

    #[test]
    fn invalid_transition_draft_to_archived() {
        assert!(!PostStatus::Draft.can_transition_to(PostStatus::Archived));
    }

    #[test]
    fn invalid_transition_archived_to_published() {
        assert!(!PostStatus::Archived.can_transition_to(PostStatus::Published));
    }

    #[test]
    fn status_display() {
        assert_eq!(PostStatus::Draft.to_string(), "draft");
        assert_eq!(PostStatus::Published.to_string(), "published");
        assert_eq!(PostStatus::Archived.to_string(), "archived");
    }
}
