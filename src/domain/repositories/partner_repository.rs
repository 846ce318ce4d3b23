use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::partner::Partner;

/// Repository trait for partner organizations
#[async_trait]
pub trait PartnerRepository: Send + Sync {
    async fn create(&self, partner: &Partner) -> Result<Uuid, String>;
    async fn update(&self, partner: &Partner) -> Result<(), String>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, String>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Partner>, String>;
    /// List active partners ordered by display_order (public strip)
    async fn list_active(&self) -> Result<Vec<Partner>, String>;
    /// List all non-deleted partners for the admin table
    async fn list_all(&self) -> Result<Vec<Partner>, String>;
}
