use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::team::{TeamMember, TeamValue};

/// Repository trait for team members shown on the public team page
#[async_trait]
pub trait TeamMemberRepository: Send + Sync {
    async fn create(&self, member: &TeamMember) -> Result<Uuid, String>;
    async fn update(&self, member: &TeamMember) -> Result<(), String>;
    /// Soft-delete a member; returns false if it does not exist
    async fn soft_delete(&self, id: Uuid) -> Result<bool, String>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TeamMember>, String>;
    /// List members ordered by display_order
    async fn list(&self) -> Result<Vec<TeamMember>, String>;
}

/// Repository trait for company value cards
#[async_trait]
pub trait TeamValueRepository: Send + Sync {
    async fn create(&self, value: &TeamValue) -> Result<Uuid, String>;
    async fn update(&self, value: &TeamValue) -> Result<(), String>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool, String>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<TeamValue>, String>;
    /// List values ordered by display_order
    async fn list(&self) -> Result<Vec<TeamValue>, String>;
}
