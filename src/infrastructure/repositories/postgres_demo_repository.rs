use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::demo::{AvailabilitySlot, DemoInterest, DemoRequest, DemoRequestStatus};
use crate::domain::repositories::demo_repository::{
    AvailabilitySlotRepository, DemoInterestRepository, DemoRequestRepository,
};

/// Column list for `availability_slots` queries
const SLOT_COLUMNS: &str =
    "id, starts_at, ends_at, capacity, booked_count, is_open, created_at, updated_at";

/// Column list for `demo_requests` queries
const REQUEST_COLUMNS: &str = "id, name, email, company, phone, message, interest_id, \
     slot_id, status, created_at, updated_at";

/// PostgreSQL implementation of DemoInterestRepository
pub struct PostgresDemoInterestRepository {
    pool: PgPool,
}

impl PostgresDemoInterestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DemoInterestRepository for PostgresDemoInterestRepository {
    async fn create(&self, interest: &DemoInterest) -> Result<Uuid, String> {
        sqlx::query("INSERT INTO demo_interests (id, label, slug) VALUES ($1, $2, $3)")
            .bind(interest.id)
            .bind(&interest.label)
            .bind(&interest.slug)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to create demo interest: {}", e))?;

        Ok(interest.id)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, String> {
        let result = sqlx::query("DELETE FROM demo_interests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete demo interest: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<DemoInterest>, String> {
        sqlx::query_as::<_, DemoInterest>(
            "SELECT id, label, slug, created_at FROM demo_interests WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find demo interest by id: {}", e))
    }

    async fn list(&self) -> Result<Vec<DemoInterest>, String> {
        sqlx::query_as::<_, DemoInterest>(
            "SELECT id, label, slug, created_at FROM demo_interests ORDER BY label",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list demo interests: {}", e))
    }
}

/// PostgreSQL implementation of AvailabilitySlotRepository
pub struct PostgresAvailabilitySlotRepository {
    pool: PgPool,
}

impl PostgresAvailabilitySlotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AvailabilitySlotRepository for PostgresAvailabilitySlotRepository {
    async fn create(&self, slot: &AvailabilitySlot) -> Result<Uuid, String> {
        sqlx::query(
            "INSERT INTO availability_slots \
             (id, starts_at, ends_at, capacity, booked_count, is_open) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(slot.id)
        .bind(slot.starts_at)
        .bind(slot.ends_at)
        .bind(slot.capacity)
        .bind(slot.booked_count)
        .bind(slot.is_open)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create availability slot: {}", e))?;

        Ok(slot.id)
    }

    async fn update(&self, slot: &AvailabilitySlot) -> Result<(), String> {
        sqlx::query(
            "UPDATE availability_slots SET \
             starts_at = $2, ends_at = $3, capacity = $4, is_open = $5, updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(slot.id)
        .bind(slot.starts_at)
        .bind(slot.ends_at)
        .bind(slot.capacity)
        .bind(slot.is_open)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to update availability slot: {}", e))?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, String> {
        let result = sqlx::query("DELETE FROM availability_slots WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete availability slot: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<AvailabilitySlot>, String> {
        sqlx::query_as::<_, AvailabilitySlot>(&format!(
            "SELECT {SLOT_COLUMNS} FROM availability_slots WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find availability slot by id: {}", e))
    }

    async fn list_open(&self) -> Result<Vec<AvailabilitySlot>, String> {
        sqlx::query_as::<_, AvailabilitySlot>(&format!(
            "SELECT {SLOT_COLUMNS} FROM availability_slots \
             WHERE is_open = true AND starts_at > NOW() AND booked_count < capacity \
             ORDER BY starts_at"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list open slots: {}", e))
    }

    async fn list_all(&self) -> Result<Vec<AvailabilitySlot>, String> {
        sqlx::query_as::<_, AvailabilitySlot>(&format!(
            "SELECT {SLOT_COLUMNS} FROM availability_slots ORDER BY starts_at"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list slots: {}", e))
    }

    async fn book(&self, id: Uuid) -> Result<bool, String> {
        // The guard in the WHERE clause keeps booked_count <= capacity even
        // under concurrent bookings.
        let result = sqlx::query(
            "UPDATE availability_slots \
             SET booked_count = booked_count + 1, updated_at = NOW() \
             WHERE id = $1 AND is_open = true AND starts_at > NOW() \
             AND booked_count < capacity",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to book slot: {}", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn release(&self, id: Uuid) -> Result<(), String> {
        sqlx::query(
            "UPDATE availability_slots \
             SET booked_count = GREATEST(booked_count - 1, 0), updated_at = NOW() \
             WHERE id = $1",
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to release slot: {}", e))?;

        Ok(())
    }
}

/// PostgreSQL implementation of DemoRequestRepository
pub struct PostgresDemoRequestRepository {
    pool: PgPool,
}

impl PostgresDemoRequestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DemoRequestRepository for PostgresDemoRequestRepository {
    async fn create(&self, request: &DemoRequest) -> Result<Uuid, String> {
        sqlx::query(
            "INSERT INTO demo_requests \
             (id, name, email, company, phone, message, interest_id, slot_id, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(request.id)
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.company)
        .bind(&request.phone)
        .bind(&request.message)
        .bind(request.interest_id)
        .bind(request.slot_id)
        .bind(request.status)
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to create demo request: {}", e))?;

        Ok(request.id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<DemoRequest>, String> {
        sqlx::query_as::<_, DemoRequest>(&format!(
            "SELECT {REQUEST_COLUMNS} FROM demo_requests WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find demo request by id: {}", e))
    }

    async fn list(&self, status: Option<DemoRequestStatus>) -> Result<Vec<DemoRequest>, String> {
        match status {
            Some(status) => sqlx::query_as::<_, DemoRequest>(&format!(
                "SELECT {REQUEST_COLUMNS} FROM demo_requests \
                 WHERE status = $1 ORDER BY created_at DESC"
            ))
            .bind(status)
            .fetch_all(&self.pool)
            .await,
            None => sqlx::query_as::<_, DemoRequest>(&format!(
                "SELECT {REQUEST_COLUMNS} FROM demo_requests ORDER BY created_at DESC"
            ))
            .fetch_all(&self.pool)
            .await,
        }
        .map_err(|e| format!("Failed to list demo requests: {}", e))
    }

    async fn update_status(&self, id: Uuid, status: DemoRequestStatus) -> Result<(), String> {
        sqlx::query("UPDATE demo_requests SET status = $2, updated_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to update demo request status: {}", e))?;

        Ok(())
    }
}
