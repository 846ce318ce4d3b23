use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::video::Video;

/// Repository trait for embedded video links
#[async_trait]
pub trait VideoRepository: Send + Sync {
    async fn create(&self, video: &Video) -> Result<Uuid, String>;
    async fn update(&self, video: &Video) -> Result<(), String>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, String>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, String>;
    /// List published videos ordered by display_order (public page)
    async fn list_published(&self) -> Result<Vec<Video>, String>;
    /// List all non-deleted videos for the admin table
    async fn list_all(&self) -> Result<Vec<Video>, String>;
}
