use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::video_repository::VideoRepository;
use crate::domain::video::Video;

/// Column list for `videos` queries
const COLUMNS: &str = "id, title, url, description, display_order, is_published, \
     created_at, updated_at, deleted_at";

/// PostgreSQL implementation of VideoRepository
pub struct PostgresVideoRepository {
    pool: PgPool,
}

impl PostgresVideoRepository {
    /// Creates a new PostgresVideoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VideoRepository for PostgresVideoRepository {
    async fn create(&self, video: &Video) -> Result<Uuid, String> {
        sqlx::query(
            "INSERT INTO videos (id, title, url, description, display_order, is_published) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(video.id)
        .bind(&video.title)
        .bind(&video.url)
        .bind(&video.description)
        .bind(video.display_order)
        .bind(video.is_published)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create video: {}", e))?;

        Ok(video.id)
    }

    async fn update(&self, video: &Video) -> Result<(), String> {
        sqlx::query(
            "UPDATE videos SET \
             title = $2, url = $3, description = $4, display_order = $5, \
             is_published = $6, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(video.id)
        .bind(&video.title)
        .bind(&video.url)
        .bind(&video.description)
        .bind(video.display_order)
        .bind(video.is_published)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to update video: {}", e))?;

        Ok(())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, String> {
        let result = sqlx::query(
            "UPDATE videos SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to delete video: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, String> {
        sqlx::query_as::<_, Video>(&format!(
            "SELECT {COLUMNS} FROM videos WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find video by id: {}", e))
    }

    async fn list_published(&self) -> Result<Vec<Video>, String> {
        sqlx::query_as::<_, Video>(&format!(
            "SELECT {COLUMNS} FROM videos \
             WHERE is_published = true AND deleted_at IS NULL ORDER BY display_order, title"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list published videos: {}", e))
    }

    async fn list_all(&self) -> Result<Vec<Video>, String> {
        sqlx::query_as::<_, Video>(&format!(
            "SELECT {COLUMNS} FROM videos \
             WHERE deleted_at IS NULL ORDER BY display_order, title"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list videos: {}", e))
    }
}
