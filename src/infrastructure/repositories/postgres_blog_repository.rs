use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::blog::{Author, BlogPost, Category};
use crate::domain::repositories::blog_repository::{
    AuthorRepository, BlogPostRepository, CategoryRepository,
};

/// Column list for `blog_posts` queries
const POST_COLUMNS: &str = "id, title, slug, excerpt, body, cover_image_url, author_id, \
     category_id, status, published_at, view_count, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of BlogPostRepository
pub struct PostgresBlogPostRepository {
    pool: PgPool,
}

impl PostgresBlogPostRepository {
    /// Creates a new PostgresBlogPostRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn create(&self, post: &BlogPost) -> Result<Uuid, String> {
        sqlx::query(
            "INSERT INTO blog_posts \
             (id, title, slug, excerpt, body, cover_image_url, author_id, category_id, \
              status, published_at, view_count) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)",
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(&post.body)
        .bind(&post.cover_image_url)
        .bind(post.author_id)
        .bind(post.category_id)
        .bind(post.status)
        .bind(post.published_at)
        .bind(post.view_count)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create blog post: {}", e))?;

        Ok(post.id)
    }

    async fn update(&self, post: &BlogPost) -> Result<(), String> {
        sqlx::query(
            "UPDATE blog_posts SET \
             title = $2, slug = $3, excerpt = $4, body = $5, cover_image_url = $6, \
             author_id = $7, category_id = $8, status = $9, published_at = $10, \
             updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.excerpt)
        .bind(&post.body)
        .bind(&post.cover_image_url)
        .bind(post.author_id)
        .bind(post.category_id)
        .bind(post.status)
        .bind(post.published_at)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to update blog post: {}", e))?;

        Ok(())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, String> {
        let result = sqlx::query(
            "UPDATE blog_posts SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to delete blog post: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, String> {
        sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find blog post by id: {}", e))
    }

    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<BlogPost>, String> {
        sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts \
             WHERE slug = $1 AND status = 'published' AND deleted_at IS NULL"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find blog post by slug: {}", e))
    }

    async fn list_published(&self, category_slug: Option<&str>) -> Result<Vec<BlogPost>, String> {
        match category_slug {
            Some(category) => sqlx::query_as::<_, BlogPost>(&format!(
                "SELECT {POST_COLUMNS} FROM blog_posts \
                 WHERE status = 'published' AND deleted_at IS NULL \
                 AND category_id = (SELECT id FROM categories WHERE slug = $1) \
                 ORDER BY published_at DESC"
            ))
            .bind(category)
            .fetch_all(&self.pool)
            .await,
            None => {
                sqlx::query_as::<_, BlogPost>(&format!(
                    "SELECT {POST_COLUMNS} FROM blog_posts \
                     WHERE status = 'published' AND deleted_at IS NULL \
                     ORDER BY published_at DESC"
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| format!("Failed to list published posts: {}", e))
    }

    async fn list_all(&self) -> Result<Vec<BlogPost>, String> {
        sqlx::query_as::<_, BlogPost>(&format!(
            "SELECT {POST_COLUMNS} FROM blog_posts \
             WHERE deleted_at IS NULL ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list posts: {}", e))
    }

    async fn increment_view_count(&self, id: Uuid) -> Result<(), String> {
        sqlx::query("UPDATE blog_posts SET view_count = view_count + 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to increment view count: {}", e))?;

        Ok(())
    }
}

/// PostgreSQL implementation of AuthorRepository
pub struct PostgresAuthorRepository {
    pool: PgPool,
}

impl PostgresAuthorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PostgresAuthorRepository {
    async fn create(&self, author: &Author) -> Result<Uuid, String> {
        sqlx::query("INSERT INTO authors (id, name, title, avatar_url) VALUES ($1, $2, $3, $4)")
            .bind(author.id)
            .bind(&author.name)
            .bind(&author.title)
            .bind(&author.avatar_url)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to create author: {}", e))?;

        Ok(author.id)
    }

    async fn update(&self, author: &Author) -> Result<(), String> {
        sqlx::query(
            "UPDATE authors SET name = $2, title = $3, avatar_url = $4, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(author.id)
        .bind(&author.name)
        .bind(&author.title)
        .bind(&author.avatar_url)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to update author: {}", e))?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, String> {
        let result = sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete author: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, String> {
        sqlx::query_as::<_, Author>(
            "SELECT id, name, title, avatar_url, created_at, updated_at FROM authors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find author by id: {}", e))
    }

    async fn list(&self) -> Result<Vec<Author>, String> {
        sqlx::query_as::<_, Author>(
            "SELECT id, name, title, avatar_url, created_at, updated_at FROM authors ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list authors: {}", e))
    }
}

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn create(&self, category: &Category) -> Result<Uuid, String> {
        sqlx::query("INSERT INTO categories (id, name, slug) VALUES ($1, $2, $3)")
            .bind(category.id)
            .bind(&category.name)
            .bind(&category.slug)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to create category: {}", e))?;

        Ok(category.id)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, String> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete category: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, String> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, slug, created_at FROM categories WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find category by slug: {}", e))
    }

    async fn list(&self) -> Result<Vec<Category>, String> {
        sqlx::query_as::<_, Category>(
            "SELECT id, name, slug, created_at FROM categories ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list categories: {}", e))
    }
}
