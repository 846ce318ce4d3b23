use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::user_repository::UserRepository;
use crate::domain::user::AdminUser;
use crate::domain::value_objects::Email;

/// Column list for `admin_users` queries
const COLUMNS: &str =
    "id, email, password_hash, full_name, is_active, last_login, created_at, updated_at";

/// PostgreSQL implementation of UserRepository
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Creates a new PostgresUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, user: &AdminUser) -> Result<Uuid, String> {
        sqlx::query(
            "INSERT INTO admin_users (id, email, password_hash, full_name, is_active) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.full_name)
        .bind(user.is_active)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create admin user: {}", e))?;

        Ok(user.id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminUser>, String> {
        sqlx::query_as::<_, AdminUser>(&format!(
            "SELECT {COLUMNS} FROM admin_users WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find admin user by id: {}", e))
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<AdminUser>, String> {
        sqlx::query_as::<_, AdminUser>(&format!(
            "SELECT {COLUMNS} FROM admin_users WHERE email = $1"
        ))
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find admin user by email: {}", e))
    }

    async fn update_last_login(&self, user_id: Uuid) -> Result<(), String> {
        sqlx::query("UPDATE admin_users SET last_login = NOW(), updated_at = NOW() WHERE id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to update last login: {}", e))?;

        Ok(())
    }

    async fn update_password(&self, user_id: Uuid, password_hash: &str) -> Result<(), String> {
        sqlx::query(
            "UPDATE admin_users SET password_hash = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(user_id)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to update password: {}", e))?;

        Ok(())
    }
}
