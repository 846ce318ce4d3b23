use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::demo::{AvailabilitySlot, DemoInterest, DemoRequest, DemoRequestStatus};

/// Repository trait for demo-form interest options
#[async_trait]
pub trait DemoInterestRepository: Send + Sync {
    async fn create(&self, interest: &DemoInterest) -> Result<Uuid, String>;
    /// Delete an interest; fails while demo requests still reference it
    async fn delete(&self, id: Uuid) -> Result<bool, String>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<DemoInterest>, String>;
    async fn list(&self) -> Result<Vec<DemoInterest>, String>;
}

/// Repository trait for bookable demo calendar slots
#[async_trait]
pub trait AvailabilitySlotRepository: Send + Sync {
    async fn create(&self, slot: &AvailabilitySlot) -> Result<Uuid, String>;
    async fn update(&self, slot: &AvailabilitySlot) -> Result<(), String>;
    async fn delete(&self, id: Uuid) -> Result<bool, String>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<AvailabilitySlot>, String>;
    /// List open future slots with remaining capacity, soonest first
    async fn list_open(&self) -> Result<Vec<AvailabilitySlot>, String>;
    /// List all slots for the admin calendar view
    async fn list_all(&self) -> Result<Vec<AvailabilitySlot>, String>;

    /// Atomically take one seat in a slot
    ///
    /// Returns false when the slot is closed, in the past, or already at
    /// capacity; the booked count never exceeds capacity.
    async fn book(&self, id: Uuid) -> Result<bool, String>;

    /// Give back one seat (e.g. when a demo request is cancelled)
    async fn release(&self, id: Uuid) -> Result<(), String>;
}

/// Repository trait for demo requests
#[async_trait]
pub trait DemoRequestRepository: Send + Sync {
    async fn create(&self, request: &DemoRequest) -> Result<Uuid, String>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<DemoRequest>, String>;
    /// List requests newest first, optionally filtered by status
    async fn list(&self, status: Option<DemoRequestStatus>) -> Result<Vec<DemoRequest>, String>;
    async fn update_status(&self, id: Uuid, status: DemoRequestStatus) -> Result<(), String>;
}
