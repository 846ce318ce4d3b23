use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::AdminUser;
use crate::domain::value_objects::Email;

/// Repository trait for admin accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new admin user
    async fn create(&self, user: &AdminUser) -> Result<Uuid, String>;

    /// Find an admin by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AdminUser>, String>;

    /// Find an admin by email address
    async fn find_by_email(&self, email: &Email) -> Result<Option<AdminUser>, String>;

    /// Update the admin's last login timestamp
    async fn update_last_login(&self, user_id: Uuid) -> Result<(), String>;

    /// Replace the admin's password hash
    async fn update_password(&self, user_id: Uuid, password_hash: &str) -> Result<(), String>;
}
