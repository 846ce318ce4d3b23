use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::blog::{Author, BlogPost, Category};

/// Repository trait for blog posts
///
/// Public reads only ever see published, non-deleted posts; admin reads
/// see everything that is not soft-deleted.
#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    /// Insert a new post
    async fn create(&self, post: &BlogPost) -> Result<Uuid, String>;

    /// Update an existing post (all mutable fields)
    async fn update(&self, post: &BlogPost) -> Result<(), String>;

    /// Soft-delete a post; returns false if it does not exist
    async fn soft_delete(&self, id: Uuid) -> Result<bool, String>;

    /// Find a post by ID (admin view, any status)
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, String>;

    /// Find a published post by slug (public view)
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, String>;

    /// List published posts, newest first, optionally filtered by category slug
    async fn list_published(&self, category_slug: Option<&str>) -> Result<Vec<BlogPost>, String>;

    /// List all non-deleted posts for the admin table
    async fn list_all(&self) -> Result<Vec<BlogPost>, String>;

    /// Increment the view counter for a published post
    async fn increment_view_count(&self, id: Uuid) -> Result<(), String>;
}

/// Repository trait for blog authors
#[async_trait]
pub trait AuthorRepository: Send + Sync {
    async fn create(&self, author: &Author) -> Result<Uuid, String>;
    async fn update(&self, author: &Author) -> Result<(), String>;
    /// Delete an author; fails while posts still reference them
    async fn delete(&self, id: Uuid) -> Result<bool, String>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, String>;
    async fn list(&self) -> Result<Vec<Author>, String>;
}

/// Repository trait for blog categories
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, category: &Category) -> Result<Uuid, String>;
    /// Delete a category; fails while posts still reference it
    async fn delete(&self, id: Uuid) -> Result<bool, String>;
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, String>;
    async fn list(&self) -> Result<Vec<Category>, String>;
}
