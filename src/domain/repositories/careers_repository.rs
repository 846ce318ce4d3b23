use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::careers::{Department, Job};

/// Repository trait for hiring departments
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    async fn create(&self, department: &Department) -> Result<Uuid, String>;
    /// Delete a department; fails while jobs still reference it
    async fn delete(&self, id: Uuid) -> Result<bool, String>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Department>, String>;
    async fn list(&self) -> Result<Vec<Department>, String>;
}

/// Repository trait for job postings
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: &Job) -> Result<Uuid, String>;
    async fn update(&self, job: &Job) -> Result<(), String>;
    /// Soft-delete a posting; returns false if it does not exist
    async fn soft_delete(&self, id: Uuid) -> Result<bool, String>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, String>;
    /// Find an open posting by slug (public careers page)
    async fn find_open_by_slug(&self, slug: &str) -> Result<Option<Job>, String>;
    /// List open postings, newest first (public careers page)
    async fn list_open(&self) -> Result<Vec<Job>, String>;
    /// List all non-deleted postings for the admin table
    async fn list_all(&self) -> Result<Vec<Job>, String>;
}
