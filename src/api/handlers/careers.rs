use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::api::middleware::auth::JwtAuth;
use crate::domain::careers::{Department, Job, JobStatus};
use crate::domain::repositories::{DepartmentRepository, JobRepository};
use crate::domain::value_objects::Slug;
use crate::infrastructure::repositories::{PostgresDepartmentRepository, PostgresJobRepository};
use crate::state::AppState;

/// Request body for creating a job posting
#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    /// Explicit slug; derived from the title when omitted
    pub slug: Option<String>,
    pub department_id: Uuid,
    pub location: String,
    pub employment_type: String,
    pub description: String,
    pub status: Option<JobStatus>,
}

/// Request body for updating a job posting
#[derive(Debug, Deserialize)]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub department_id: Option<Uuid>,
    pub location: Option<String>,
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub status: Option<JobStatus>,
}

/// Request body for creating a department
#[derive(Debug, Deserialize)]
pub struct CreateDepartmentRequest {
    pub name: String,
}

/// List open job postings for the public careers page
///
/// GET /careers/jobs
pub async fn list_open_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, ApiError> {
    let job_repo = PostgresJobRepository::new(state.pool.clone());
    let jobs = job_repo
        .list_open()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(jobs))
}

/// Get an open job posting by slug
///
/// GET /careers/jobs/:slug
pub async fn get_open_job(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Job>, ApiError> {
    let job_repo = PostgresJobRepository::new(state.pool.clone());
    let job = job_repo
        .find_open_by_slug(&slug)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Job not found: {}", slug)))?;

    Ok(Json(job))
}

/// List all job postings for the admin table
///
/// GET /careers/admin/jobs
pub async fn list_all_jobs(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
) -> Result<Json<Vec<Job>>, ApiError> {
    let job_repo = PostgresJobRepository::new(state.pool.clone());
    let jobs = job_repo
        .list_all()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(jobs))
}

/// Create a job posting
///
/// POST /careers/jobs
pub async fn create_job(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Json(req): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<Job>), ApiError> {
    if req.title.trim().is_empty() {
        return Err(ApiError::bad_request("Title cannot be empty"));
    }
    if req.location.trim().is_empty() {
        return Err(ApiError::bad_request("Location cannot be empty"));
    }
    if req.employment_type.trim().is_empty() {
        return Err(ApiError::bad_request("Employment type cannot be empty"));
    }
    if req.description.trim().is_empty() {
        return Err(ApiError::bad_request("Description cannot be empty"));
    }

    let slug = match req.slug.as_deref() {
        Some(slug) => {
            Slug::new(slug).map_err(|e| ApiError::bad_request(format!("Invalid slug: {}", e)))?
        }
        None => Slug::from_title(&req.title)
            .map_err(|e| ApiError::bad_request(format!("Cannot derive slug: {}", e)))?,
    };

    // Department must exist
    let department_repo = PostgresDepartmentRepository::new(state.pool.clone());
    department_repo
        .find_by_id(req.department_id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| {
            ApiError::bad_request(format!("Unknown department: {}", req.department_id))
        })?;

    let now = Utc::now();
    let job = Job {
        id: Uuid::new_v4(),
        title: req.title.trim().to_string(),
        slug: slug.to_string(),
        department_id: req.department_id,
        location: req.location.trim().to_string(),
        employment_type: req.employment_type.trim().to_string(),
        description: req.description,
        status: req.status.unwrap_or(JobStatus::Open),
        posted_at: now,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    };

    let job_repo = PostgresJobRepository::new(state.pool.clone());
    job_repo.create(&job).await.map_err(|e| {
        if e.contains("duplicate") || e.contains("unique") {
            ApiError::conflict(format!("Slug already in use: {}", job.slug))
        } else {
            ApiError::internal_server_error(format!("Failed to create job: {}", e))
        }
    })?;

    Ok((StatusCode::CREATED, Json(job)))
}

/// Update a job posting
///
/// PUT /careers/jobs/:id
pub async fn update_job(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateJobRequest>,
) -> Result<Json<Job>, ApiError> {
    let job_repo = PostgresJobRepository::new(state.pool.clone());
    let mut job = job_repo
        .find_by_id(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?
        .ok_or_else(|| ApiError::not_found(format!("Job not found: {}", id)))?;

    if let Some(title) = req.title {
        if title.trim().is_empty() {
            return Err(ApiError::bad_request("Title cannot be empty"));
        }
        job.title = title.trim().to_string();
    }
    if let Some(slug) = req.slug {
        job.slug = Slug::new(&slug)
            .map_err(|e| ApiError::bad_request(format!("Invalid slug: {}", e)))?
            .to_string();
    }
    if let Some(department_id) = req.department_id {
        job.department_id = department_id;
    }
    if let Some(location) = req.location {
        if location.trim().is_empty() {
            return Err(ApiError::bad_request("Location cannot be empty"));
        }
        job.location = location.trim().to_string();
    }
    if let Some(employment_type) = req.employment_type {
        if employment_type.trim().is_empty() {
            return Err(ApiError::bad_request("Employment type cannot be empty"));
        }
        job.employment_type = employment_type.trim().to_string();
    }
    if let Some(description) = req.description {
        if description.trim().is_empty() {
            return Err(ApiError::bad_request("Description cannot be empty"));
        }
        job.description = description;
    }
    if let Some(status) = req.status {
        job.status = status;
    }

    job_repo.update(&job).await.map_err(|e| {
        if e.contains("duplicate") || e.contains("unique") {
            ApiError::conflict(format!("Slug already in use: {}", job.slug))
        } else if e.contains("foreign key") {
            ApiError::bad_request(format!("Unknown department: {}", job.department_id))
        } else {
            ApiError::internal_server_error(format!("Failed to update job: {}", e))
        }
    })?;

    Ok(Json(job))
}

/// Soft-delete a job posting
///
/// DELETE /careers/jobs/:id
pub async fn delete_job(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let job_repo = PostgresJobRepository::new(state.pool.clone());
    let deleted = job_repo
        .soft_delete(id)
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Failed to delete job: {}", e)))?;

    if !deleted {
        return Err(ApiError::not_found(format!("Job not found: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// List departments
///
/// GET /careers/departments
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Department>>, ApiError> {
    let department_repo = PostgresDepartmentRepository::new(state.pool.clone());
    let departments = department_repo
        .list()
        .await
        .map_err(|e| ApiError::internal_server_error(format!("Database error: {}", e)))?;

    Ok(Json(departments))
}

/// Create a department
///
/// POST /careers/departments
pub async fn create_department(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<Department>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(ApiError::bad_request("Name cannot be empty"));
    }

    let department = Department {
        id: Uuid::new_v4(),
        name: req.name.trim().to_string(),
        created_at: Utc::now(),
    };

    let department_repo = PostgresDepartmentRepository::new(state.pool.clone());
    department_repo.create(&department).await.map_err(|e| {
        if e.contains("duplicate") || e.contains("unique") {
            ApiError::conflict(format!("Department already exists: {}", department.name))
        } else {
            ApiError::internal_server_error(format!("Failed to create department: {}", e))
        }
    })?;

    Ok((StatusCode::CREATED, Json(department)))
}

/// Delete a department
///
/// DELETE /careers/departments/:id
pub async fn delete_department(
    State(state): State<AppState>,
    JwtAuth(_admin_id): JwtAuth,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let department_repo = PostgresDepartmentRepository::new(state.pool.clone());
    let deleted = department_repo.delete(id).await.map_err(|e| {
        if e.contains("foreign key") {
            ApiError::conflict("Department still has jobs and cannot be deleted")
        } else {
            ApiError::internal_server_error(format!("Failed to delete department: {}", e))
        }
    })?;

    if !deleted {
        return Err(ApiError::not_found(format!("Department not found: {}", id)));
    }

    Ok(StatusCode::NO_CONTENT)
}
