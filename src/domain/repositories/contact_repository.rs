use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::contact::{ContactInquiry, InquiryStatus};

/// Repository trait for contact-form inquiries
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, inquiry: &ContactInquiry) -> Result<Uuid, String>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ContactInquiry>, String>;
    /// List inquiries newest first, optionally filtered by status
    async fn list(&self, status: Option<InquiryStatus>) -> Result<Vec<ContactInquiry>, String>;
    async fn update_status(&self, id: Uuid, status: InquiryStatus) -> Result<(), String>;
}
