use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::careers::{Department, Job};
use crate::domain::repositories::careers_repository::{DepartmentRepository, JobRepository};

/// Column list for `jobs` queries
const JOB_COLUMNS: &str = "id, title, slug, department_id, location, employment_type, \
     description, status, posted_at, created_at, updated_at, deleted_at";

/// PostgreSQL implementation of DepartmentRepository
pub struct PostgresDepartmentRepository {
    pool: PgPool,
}

impl PostgresDepartmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DepartmentRepository for PostgresDepartmentRepository {
    async fn create(&self, department: &Department) -> Result<Uuid, String> {
        sqlx::query("INSERT INTO departments (id, name) VALUES ($1, $2)")
            .bind(department.id)
            .bind(&department.name)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to create department: {}", e))?;

        Ok(department.id)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, String> {
        let result = sqlx::query("DELETE FROM departments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete department: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Department>, String> {
        sqlx::query_as::<_, Department>(
            "SELECT id, name, created_at FROM departments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find department by id: {}", e))
    }

    async fn list(&self) -> Result<Vec<Department>, String> {
        sqlx::query_as::<_, Department>("SELECT id, name, created_at FROM departments ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| format!("Failed to list departments: {}", e))
    }
}

/// PostgreSQL implementation of JobRepository
pub struct PostgresJobRepository {
    pool: PgPool,
}

impl PostgresJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn create(&self, job: &Job) -> Result<Uuid, String> {
        sqlx::query(
            "INSERT INTO jobs \
             (id, title, slug, department_id, location, employment_type, description, \
              status, posted_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.slug)
        .bind(job.department_id)
        .bind(&job.location)
        .bind(&job.employment_type)
        .bind(&job.description)
        .bind(job.status)
        .bind(job.posted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create job: {}", e))?;

        Ok(job.id)
    }

    async fn update(&self, job: &Job) -> Result<(), String> {
        sqlx::query(
            "UPDATE jobs SET \
             title = $2, slug = $3, department_id = $4, location = $5, \
             employment_type = $6, description = $7, status = $8, updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(job.id)
        .bind(&job.title)
        .bind(&job.slug)
        .bind(job.department_id)
        .bind(&job.location)
        .bind(&job.employment_type)
        .bind(&job.description)
        .bind(job.status)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to update job: {}", e))?;

        Ok(())
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool, String> {
        let result = sqlx::query(
            "UPDATE jobs SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to delete job: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Job>, String> {
        sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1 AND deleted_at IS NULL"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find job by id: {}", e))
    }

    async fn find_open_by_slug(&self, slug: &str) -> Result<Option<Job>, String> {
        sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs \
             WHERE slug = $1 AND status = 'open' AND deleted_at IS NULL"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find job by slug: {}", e))
    }

    async fn list_open(&self) -> Result<Vec<Job>, String> {
        sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs \
             WHERE status = 'open' AND deleted_at IS NULL ORDER BY posted_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list open jobs: {}", e))
    }

    async fn list_all(&self) -> Result<Vec<Job>, String> {
        sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE deleted_at IS NULL ORDER BY posted_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list jobs: {}", e))
    }
}
