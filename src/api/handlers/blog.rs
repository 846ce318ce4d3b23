use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::domain::blog::{Author, BlogPost, Category, PostStatus};
use crate::domain::repositories::{AuthorRepository, BlogPostRepository, CategoryRepository};
use crate::domain::value_objects::Slug;
use crate::infrastructure::repositories::{
    PostgresAuthorRepository, PostgresBlogPostRepository, PostgresCategoryRepository,
};
use crate::state::AppState;

/// Request body for creating a blog post
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    /// Explicit slug; derived from the title when omitted
    pub slug: Option<String>,
    pub excerpt: String,
    pub body: String,
    pub cover_image_url: Option<String>,
    pub author_id: Uuid,
    pub category_id: Uuid,
    pub status: Option<PostStatus>,
}

/// Request body for updating a blog post (all fields optional)
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub body: Option<String>,
    pub cover_image_url: Option<String>,
    pub author_id: Option<Uuid>,
    pub category_id: Option<Uuid>,
    pub status: Option<PostStatus>,
}

/// Query parameters for the public post list
#[derive(Debug, Deserialize)]
pub struct ListPostsParams {
    /// Category slug filter
    pub category: Option<String>,
}

/// Request body for creating an author
#[derive(Debug, Deserialize)]
pub struct CreateAuthorRequest {
    pub name: String,
    pub title: Option<String>,
    pub avatar_url: Option<String>,
}

/// Request body for updating an author
#[derive(Debug, Deserialize)]
pub struct UpdateAuthorRequest {
    pub name: Option<String>,
    pub title: Option<String>,
    pub avatar_url: Option<String>,
}

/// Request body for creating a category
#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub slug: Option<String>,
}

/// Resolves the slug for a create/update payload
fn resolve_slug(explicit: Option<&str>, title: &str) -> Result<Slug, ApiError> {
    match explicit {
        Some(slug) => {
            Slug::new(slug).map_err(|e| ApiError::bad_request(format!("Invalid slug: {}", e)))
        }
        None => Slug::from_title(title)
            .map_err(|e| ApiError::bad_request(format!("Cannot derive slug: {}", e))),
    }
}

/// List published posts, optionally filtered by category slug
///
/// GET /blog/posts
pub async fn list_published_posts(
    State(state): State<AppState>,
    Query(params): Query<ListPostsParams>,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let post_repo = PostgresBlogPostRepository::new(state.pool.clone());
    let posts = post_repo
        .list_published(params.category.as_deref())
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(posts))
}

/// Get a published post by slug and count the view
///
/// GET /blog/posts/:slug
pub async fn get_published_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, ApiError> {
    let post_repo = PostgresBlogPostRepository::new(state.pool.clone());
    let post = post_repo
        .find_published_by_slug(&slug)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Post not found: {}", slug)))?;

    // Best effort; a missed count is not worth failing the read
    let _ = post_repo.increment_view_count(post.id).await;

    Ok(Json(post))
}

/// List all posts for the admin table (any status)
///
/// GET /blog/admin/posts
pub async fn list_all_posts(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
) -> Result<Json<Vec<BlogPost>>, ApiError> {
    let post_repo = PostgresBlogPostRepository::new(state.pool.clone());
    let posts = post_repo
        .list_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(posts))
}

/// Create a new blog post
///
/// POST /blog/posts
pub async fn create_post(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Json(req): Json<CreatePostRequest>,
) -> Result<(StatusCode, Json<BlogPost>), ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title cannot be empty"));
    }
    if req.excerpt.trim().is_empty() {
        return Err(ApiError::bad_request("Excerpt cannot be empty"));
    }
    if req.body.trim().is_empty() {
        return Err(ApiError::bad_request("Body cannot be empty"));
    }

    let slug = resolve_slug(req.slug.as_deref(), &req.title)?;

    // Referenced author and category must exist
    let author_repo = PostgresAuthorRepository::new(state.pool.clone());
    author_repo
        .find_by_id(req.author_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::bad_request(format!("Unknown author: {}", req.author_id)))?;

    let status = req.status.unwrap_or(PostStatus::Draft);
    let now = Utc::now();
    let post = BlogPost {
        id: Uuid::new_v4(),
        title: req.title.trim().to_string(),
        slug: slug.to_string(),
        excerpt: req.excerpt.trim().to_string(),
        body: req.body,
        cover_image_url: req.cover_image_url,
        author_id: req.author_id,
        category_id: req.category_id,
        status,
        published_at: (status == PostStatus::Published).then_some(now),
        view_count: 0,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    };

    let post_repo = PostgresBlogPostRepository::new(state.pool.clone());
    post_repo.create(&post).await.map_err(|e| {
        if e.contains("duplicate") || e.contains("unique") {
            ApiError::conflict(format!("Slug already in use: {}", post.slug))
        } else if e.contains("foreign key") {
            ApiError::bad_request(format!("Unknown category: {}", post.category_id))
        } else {
            ApiError::internal_server_error(format!("Failed to create post: {}", e))
        }
    })?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Update a blog post
///
/// PUT /blog/posts/:id
pub async fn update_post(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePostRequest>,
) -> Result<Json<BlogPost>, ApiError> {
    let post_repo = PostgresBlogPostRepository::new(state.pool.clone());
    let mut post = post_repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Post not found: {}", id)))?;

    if let Some(title) = req.title {
        if title.trim().is_empty() {
            return Err(ApiError::bad_request("Title cannot be empty"));
        }
        post.title = title.trim().to_string();
    }
    if let Some(slug) = req.slug {
        post.slug = Slug::new(&slug)
            .map_err(|e| ApiError::bad_request(format!("Invalid slug: {}", e)))?
            .to_string();
    }
    if let Some(excerpt) = req.excerpt {
        if excerpt.trim().is_empty() {
            return Err(ApiError::bad_request("Excerpt cannot be empty"));
        }
        post.excerpt = excerpt.trim().to_string();
    }
    if let Some(body) = req.body {
        if body.trim().is_empty() {
            return Err(ApiError::bad_request("Body cannot be empty"));
        }
        post.body = body;
    }
    if req.cover_image_url.is_some() {
        post.cover_image_url = req.cover_image_url;
    }
    if let Some(author_id) = req.author_id {
        post.author_id = author_id;
    }
    if let Some(category_id) = req.category_id {
        post.category_id = category_id;
    }
    if let Some(status) = req.status {
        if status != post.status {
            if !post.status.can_transition_to(status) {
                return Err(ApiError::bad_request(format!(
                    "Invalid status transition from {} to {}",
                    post.status, status
                )));
            }
            // Stamp the first publication time only
            if status == PostStatus::Published && post.published_at.is_none() {
                post.published_at = Some(Utc::now());
            }
            post.status = status;
        }
    }

    post_repo.update(&post).await.map_err(|e| {
        if e.contains("duplicate") || e.contains("unique") {
            ApiError::conflict(format!("Slug already in use: {}", post.slug))
        } else if e.contains("foreign key") {
            ApiError::bad_request("Unknown author or category")
        } else {
            ApiError::internal_server_error(format!("Failed to update post: {}", e))
        }
    })?;

    Ok(Json(post))
}

/// Soft-delete a blog post
///
/// DELETE /blog/posts/:id
pub async fn delete_post(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let post_repo = PostgresBlogPostRepository::new(state.pool.clone());
    let deleted = post_repo
        .soft_delete(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete post: {}", e)))?;

    if !deleted {
        return Err(ApiError::not_found(format!("Post not found: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List authors
///
/// GET /blog/authors
pub async fn list_authors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Author>>, ApiError> {
    let author_repo = PostgresAuthorRepository::new(state.pool.clone());
    let authors = author_repo
        .list()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(authors))
}

/// Create an author
///
/// POST /blog/authors
pub async fn create_author(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Json(req): Json<CreateAuthorRequest>,
) -> Result<(StatusCode, Json<Author>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("Name cannot be empty"));
    }

    let now = Utc::now();
    let author = Author {
        id: Uuid::new_v4(),
        name: req.name.trim().to_string(),
        title: req.title,
        avatar_url: req.avatar_url,
        created_at: now,
        updated_at: now,
    };

    let author_repo = PostgresAuthorRepository::new(state.pool.clone());
    author_repo
        .create(&author)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to create author: {}", e)))?;

    Ok((StatusCode::CREATED, Json(author)))
}

/// Update an author
///
/// PUT /blog/authors/:id
pub async fn update_author(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAuthorRequest>,
) -> Result<Json<Author>, ApiError> {
    let author_repo = PostgresAuthorRepository::new(state.pool.clone());
    let mut author = author_repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Author not found: {}", id)))?;

    if let Some(name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::bad_request("Name cannot be empty"));
        }
        author.name = name.trim().to_string();
    }
    if req.title.is_some() {
        author.title = req.title;
    }
    if req.avatar_url.is_some() {
        author.avatar_url = req.avatar_url;
    }

    author_repo
        .update(&author)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to update author: {}", e)))?;

    Ok(Json(author))
}

/// Delete an author
///
/// DELETE /blog/authors/:id
pub async fn delete_author(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let author_repo = PostgresAuthorRepository::new(state.pool.clone());
    let deleted = author_repo.delete(id).await.map_err(|e| {
        if e.contains("foreign key") {
            ApiError::conflict("Author still has posts and cannot be deleted")
        } else {
            ApiError::internal_server_error(format!("Failed to delete author: {}", e))
        }
    })?;

    if !deleted {
        return Err(ApiError::not_found(format!("Author not found: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List categories
///
/// GET /blog/categories
pub async fn list_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let category_repo = PostgresCategoryRepository::new(state.pool.clone());
    let categories = category_repo
        .list()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(categories))
}

/// Create a category
///
/// POST /blog/categories
pub async fn create_category(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Json(req): Json<CreateCategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("Name cannot be empty"));
    }

    let slug = resolve_slug(req.slug.as_deref(), &req.name)?;
    let category = Category {
        id: Uuid::new_v4(),
        name: req.name.trim().to_string(),
        slug: slug.to_string(),
        created_at: Utc::now(),
    };

    let category_repo = PostgresCategoryRepository::new(state.pool.clone());
    category_repo.create(&category).await.map_err(|e| {
        if e.contains("duplicate") || e.contains("unique") {
            ApiError::conflict(format!("Slug already in use: {}", category.slug))
        } else {
            ApiError::internal_server_error(format!("Failed to create category: {}", e))
        }
    })?;

    Ok((StatusCode::CREATED, Json(category)))
}

/// Delete a category
///
/// DELETE /blog/categories/:id
pub async fn delete_category(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let category_repo = PostgresCategoryRepository::new(state.pool.clone());
    let deleted = category_repo.delete(id).await.map_err(|e| {
        if e.contains("foreign key") {
            ApiError::conflict("Category still has posts and cannot be deleted")
        } else {
            ApiError::internal_server_error(format!("Failed to delete category: {}", e))
        }
    })?;

    if !deleted {
        return Err(ApiError::not_found(format!("Category not found: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
