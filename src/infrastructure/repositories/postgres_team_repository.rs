use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::team_repository::{TeamMemberRepository, TeamValueRepository};
use crate::domain::team::{TeamMember, TeamValue};

/// Column list for `team_members` queries
const MEMBER_COLUMNS: &str = "id, name, role_title, bio, photo_url, display_order, \
     created_at, updated_at, deleted_at";

/// Column list for `team_values` queries
const VALUE_COLUMNS: &str =
    "id, title, description, icon, display_order, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of TeamMemberRepository
pub struct PostgresTeamMemberRepository {
    pool: PgPool,
}

impl PostgresTeamMemberRepository {
    /// Creates a new PostgresTeamMemberRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamMemberRepository for PostgresTeamMemberRepository {
    async fn create(&self, member: &TeamMember) -> Result<Uuid, String> {
        sqlx::query(
            "INSERT INTO team_members (id, name, role_title, bio, photo_url, display_order) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(member.id)
        .bind(&member.name)
        .bind(&member.role_title)
        .bind(&member.bio)
        .bind(&member.photo_url)
        .bind(member.display_order)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create team member: {}", e))?;

        Ok(member.id)
    }

    async fn update(&self, member: &TeamMember) -> Result<(), String> {
        sqlx::query(
            "UPDATE team_members SET \
             name = $2, role_title = $3, bio = $4, photo_url = $5, display_order = $6, \
             updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(member.id)
        .bind(&member.name)
        .bind(&member.role_title)
        .bind(&member.bio)
        .bind(&member.photo_url)
        .bind(member.display_order)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to update team member: {}", e))?;

        Ok(())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, String> {
        let result = sqlx::query(
            "UPDATE team_members SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to delete team member: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TeamMember>, String> {
        sqlx::query_as::<_, TeamMember>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM team_members WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find team member by id: {}", e))
    }

    async fn list(&self) -> Result<Vec<TeamMember>, String> {
        sqlx::query_as::<_, TeamMember>(&format!(
            "SELECT {MEMBER_COLUMNS} FROM team_members \
             WHERE deleted_at IS NULL ORDER BY display_order, name"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list team members: {}", e))
    }
}

/// PostgreSQL implementation of TeamValueRepository
pub struct PostgresTeamValueRepository {
    pool: PgPool,
}

impl PostgresTeamValueRepository {
    /// Creates a new PostgresTeamValueRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TeamValueRepository for PostgresTeamValueRepository {
    async fn create(&self, value: &TeamValue) -> Result<Uuid, String> {
        sqlx::query(
            "INSERT INTO team_values (id, title, description, icon, display_order) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(value.id)
        .bind(&value.title)
        .bind(&value.description)
        .bind(&value.icon)
        .bind(value.display_order)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create team value: {}", e))?;

        Ok(value.id)
    }

    async fn update(&self, value: &TeamValue) -> Result<(), String> {
        sqlx::query(
            "UPDATE team_values SET \
             title = $2, description = $3, icon = $4, display_order = $5, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(value.id)
        .bind(&value.title)
        .bind(&value.description)
        .bind(&value.icon)
        .bind(value.display_order)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to update team value: {}", e))?;

        Ok(())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, String> {
        let result = sqlx::query(
            "UPDATE team_values SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to delete team value: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<TeamValue>, String> {
        sqlx::query_as::<_, TeamValue>(&format!(
            "SELECT {VALUE_COLUMNS} FROM team_values WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find team value by id: {}", e))
    }

    async fn list(&self) -> Result<Vec<TeamValue>, String> {
        sqlx::query_as::<_, TeamValue>(&format!(
            "SELECT {VALUE_COLUMNS} FROM team_values \
             WHERE deleted_at IS NULL ORDER BY display_order, title"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list team values: {}", e))
    }
}
