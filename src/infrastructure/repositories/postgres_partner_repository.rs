use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::partner::Partner;
use crate::domain::repositories::partner_repository::PartnerRepository;

/// Column list for `partners` queries
const COLUMNS: &str = "id, name, logo_url, website_url, display_order, is_active, \
     created_at, updated_at, deleted_at";

/// PostgreSQL implementation of PartnerRepository
pub struct PostgresPartnerRepository {
    pool: PgPool,
}

impl PostgresPartnerRepository {
    /// Creates a new PostgresPartnerRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PartnerRepository for PostgresPartnerRepository {
    async fn create(&self, partner: &Partner) -> Result<Uuid, String> {
        sqlx::query(
            "INSERT INTO partners (id, name, logo_url, website_url, display_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(partner.id)
        .bind(&partner.name)
        .bind(&partner.logo_url)
        .bind(&partner.website_url)
        .bind(partner.display_order)
        .bind(partner.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create partner: {}", e))?;

        Ok(partner.id)
    }

    async fn update(&self, partner: &Partner) -> Result<(), String> {
        sqlx::query(
            "UPDATE partners SET \
             name = $2, logo_url = $3, website_url = $4, display_order = $5, \
             is_active = $6, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(partner.id)
        .bind(&partner.name)
        .bind(&partner.logo_url)
        .bind(&partner.website_url)
        .bind(partner.display_order)
        .bind(partner.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to update partner: {}", e))?;

        Ok(())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, String> {
        let result = sqlx::query(
            "UPDATE partners SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to delete partner: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Partner>, String> {
        sqlx::query_as::<_, Partner>(&format!(
            "SELECT {COLUMNS} FROM partners WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find partner by id: {}", e))
    }

    async fn list_active(&self) -> Result<Vec<Partner>, String> {
        sqlx::query_as::<_, Partner>(&format!(
            "SELECT {COLUMNS} FROM partners \
             WHERE is_active = true AND deleted_at IS NULL ORDER BY display_order, name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list active partners: {}", e))
    }

    async fn list_all(&self) -> Result<Vec<Partner>, String> {
        sqlx::query_as::<_, Partner>(&format!(
            "SELECT {COLUMNS} FROM partners \
             WHERE deleted_at IS NULL ORDER BY display_order, name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list partners: {}", e))
    }
}
