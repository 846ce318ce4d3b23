//! Integration tests for the repository layer
//!
//! These tests verify that repository implementations correctly interact
//! with PostgreSQL: CRUD operations, soft deletes, uniqueness and slot
//! booking capacity. They need a migrated database, so the whole file is
//! `#[ignore]`d; run with
//! `DATABASE_URL=... cargo test --test repository_integration -- --ignored`.

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use halcyon_api::domain::demo::AvailabilitySlot;
use halcyon_api::domain::newsletter::Subscriber;
use halcyon_api::domain::partner::Partner;
use halcyon_api::domain::repositories::{
    AvailabilitySlotRepository, NewsletterRepository, PartnerRepository, SubscribeOutcome,
};
use halcyon_api::domain::value_objects::Email;
use halcyon_api::infrastructure::repositories::{
    PostgresAvailabilitySlotRepository, PostgresNewsletterRepository, PostgresPartnerRepository,
};

/// Set up test database connection pool
async fn setup_test_db() -> PgPool {
    let database_url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for integration tests");

    PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to test database")
}

fn test_slot(capacity: i32) -> AvailabilitySlot {
    let now = Utc::now();
    AvailabilitySlot {
        id: Uuid::new_v4(),
        starts_at: now + Duration::days(1),
        ends_at: now + Duration::days(1) + Duration::minutes(30),
        capacity,
        booked_count: 0,
        is_open: true,
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a migrated Postgres"]
async fn test_slot_booking_respects_capacity() {
    let pool = setup_test_db().await;
    let slot_repo = PostgresAvailabilitySlotRepository::new(pool.clone());

    let slot = test_slot(2);
    slot_repo.create(&slot).await.expect("create slot");

    // Two bookings fit, the third must be refused
    assert!(slot_repo.book(slot.id).await.expect("first booking"));
    assert!(slot_repo.book(slot.id).await.expect("second booking"));
    assert!(!slot_repo.book(slot.id).await.expect("third booking refused"));

    let stored = slot_repo
        .find_by_id(slot.id)
        .await
        .expect("find slot")
        .expect("slot exists");
    assert_eq!(stored.booked_count, 2);
    assert_eq!(stored.remaining(), 0);

    // Releasing a seat makes the slot bookable again
    slot_repo.release(slot.id).await.expect("release");
    assert!(slot_repo.book(slot.id).await.expect("booking after release"));

    slot_repo.delete(slot.id).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a migrated Postgres"]
async fn test_closed_slot_cannot_be_booked() {
    let pool = setup_test_db().await;
    let slot_repo = PostgresAvailabilitySlotRepository::new(pool.clone());

    let mut slot = test_slot(5);
    slot.is_open = false;
    slot_repo.create(&slot).await.expect("create slot");

    assert!(!slot_repo.book(slot.id).await.expect("booking refused"));

    slot_repo.delete(slot.id).await.expect("cleanup");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a migrated Postgres"]
async fn test_newsletter_subscribe_outcomes() {
    let pool = setup_test_db().await;
    let newsletter_repo = PostgresNewsletterRepository::new(pool.clone());

    let email = Email::new(format!("repo-{}@example.com", Uuid::new_v4())).unwrap();

    let (subscriber, outcome) = newsletter_repo.subscribe(&email).await.expect("subscribe");
    assert_eq!(outcome, SubscribeOutcome::Created);
    assert!(subscriber.is_active);

    let (_, outcome) = newsletter_repo.subscribe(&email).await.expect("resubscribe");
    assert_eq!(outcome, SubscribeOutcome::AlreadySubscribed);

    assert!(newsletter_repo.unsubscribe(&email).await.expect("unsubscribe"));
    // Unsubscribing twice is a no-op
    assert!(!newsletter_repo.unsubscribe(&email).await.expect("second unsubscribe"));

    let (reactivated, outcome) = newsletter_repo.subscribe(&email).await.expect("reactivate");
    assert_eq!(outcome, SubscribeOutcome::Reactivated);
    assert!(reactivated.is_active);
    assert!(reactivated.unsubscribed_at.is_none());

    // Cleanup
    sqlx::query("DELETE FROM newsletter_subscribers WHERE email = $1")
        .bind(email.as_str())
        .execute(&pool)
        .await
        .expect("cleanup");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL pointing at a migrated Postgres"]
async fn test_partner_soft_delete_hides_from_lists() {
    let pool = setup_test_db().await;
    let partner_repo = PostgresPartnerRepository::new(pool.clone());

    let now = Utc::now();
    let partner = Partner {
        id: Uuid::new_v4(),
        name: format!("Repo Test Partner {}", Uuid::new_v4()),
        logo_url: None,
        website_url: Some("https://example.com".to_string()),
        display_order: 99,
        is_active: true,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    };

    partner_repo.create(&partner).await.expect("create partner");

    let listed = partner_repo.list_active().await.expect("list");
    assert!(listed.iter().any(|p| p.id == partner.id));

    assert!(partner_repo.soft_delete(partner.id).await.expect("delete"));

    let listed = partner_repo.list_all().await.expect("list all");
    assert!(!listed.iter().any(|p| p.id == partner.id));

    // Deleting again reports not found
    assert!(!partner_repo.soft_delete(partner.id).await.expect("second delete"));

    // Cleanup the tombstone
    sqlx::query("DELETE FROM partners WHERE id = $1")
        .bind(partner.id)
        .execute(&pool)
        .await
        .expect("cleanup");
}

/// Subscriber type stays minimal on purpose; guard the shape the admin
/// table depends on.
#[test]
fn subscriber_serializes_admin_fields() {
    let subscriber = Subscriber {
        id: Uuid::new_v4(),
        email: "check@example.com".to_string(),
        is_active: true,
        subscribed_at: Utc::now(),
        unsubscribed_at: None,
    };

    let value = serde_json::to_value(&subscriber).unwrap();
    assert_eq!(value["email"], "check@example.com");
    assert_eq!(value["is_active"], true);
    assert!(value.get("subscribed_at").is_some());
}
