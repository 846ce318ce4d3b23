use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::contact::{ContactInquiry, InquiryStatus};
use crate::domain::repositories::contact_repository::ContactRepository;

/// Column list for `contact_inquiries` queries
const COLUMNS: &str = "id, name, email, subject, message, status, created_at, updated_at";

/// PostgreSQL implementation of ContactRepository
pub struct PostgresContactRepository {
    pool: PgPool,
}

impl PostgresContactRepository {
    /// Creates a new PostgresContactRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactRepository for PostgresContactRepository {
    async fn create(&self, inquiry: &ContactInquiry) -> Result<Uuid, String> {
        sqlx::query(
            "INSERT INTO contact_inquiries (id, name, email, subject, message, status) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(inquiry.id)
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.subject)
        .bind(&inquiry.message)
        .bind(inquiry.status)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create contact inquiry: {}", e))?;

        Ok(inquiry.id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactInquiry>, String> {
        sqlx::query_as::<_, ContactInquiry>(&format!(
            "SELECT {COLUMNS} FROM contact_inquiries WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find contact inquiry by id: {}", e))
    }

    async fn list(&self, status: Option<InquiryStatus>) -> Result<Vec<ContactInquiry>, String> {
        match status {
            Some(status) => sqlx::query_as::<_, ContactInquiry>(&format!(
                "SELECT {COLUMNS} FROM contact_inquiries \
                 WHERE status = $1 ORDER BY created_at DESC"
            ))
            .bind(status)
            .fetch_all(&self.pool)
            .await,
            None => sqlx::query_as::<_, ContactInquiry>(&format!(
                "SELECT {COLUMNS} FROM contact_inquiries ORDER BY created_at DESC"
            ))
            .fetch_all(&self.pool)
            .await,
        }
        .map_err(|e| format!("Failed to list contact inquiries: {}", e))
    }

    async fn update_status(&self, id: Uuid, status: InquiryStatus) -> Result<(), String> {
        sqlx::query("UPDATE contact_inquiries SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to update inquiry status: {}", e))?;

        Ok(())
    }
}
