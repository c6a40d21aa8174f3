//! Integration tests for the `events` repository.
//!
//! - Create then read back, including the name fallback and forced status
//! - Owner scoping and newest-first listing
//! - Partial, idempotent updates that stamp `updated_at`
//! - Deleting missing rows is not an error

use chrono::{NaiveDate, NaiveTime};
use planner_core::identity::Identity;
use planner_db::models::event::{CreateEvent, UpdateEvent};
use planner_db::repositories::EventRepo;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn owner() -> Identity {
    Identity::new(Uuid::new_v4())
}

fn new_event(event_type: &str) -> CreateEvent {
    CreateEvent {
        event_name: None,
        event_type: Some(event_type.to_string()),
        description: Some("An evening of talks".to_string()),
        date: NaiveDate::from_ymd_opt(2026, 12, 5),
        time: NaiveTime::from_hms_opt(18, 30, 0),
        location: Some("Riverside Hall".to_string()),
        city: Some("Porto".to_string()),
        venue_type: Some("indoor".to_string()),
        audience_size: Some(120),
        duration: Some("3 hours".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_then_find_returns_input(pool: PgPool) {
    let owner = owner();
    let input = new_event("conference");

    let created = EventRepo::create(&pool, &owner, &input).await.unwrap();
    let found = EventRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .expect("event should exist");

    assert_eq!(found.user_id, owner.user_id);
    assert_eq!(found.event_name.as_deref(), Some("conference"));
    assert_eq!(found.event_type.as_deref(), Some("conference"));
    assert_eq!(found.event_description, input.description);
    assert_eq!(found.event_date, input.date);
    assert_eq!(found.event_time, input.time);
    assert_eq!(found.location, input.location);
    assert_eq!(found.city, input.city);
    assert_eq!(found.venue_type, input.venue_type);
    assert_eq!(found.audience_size, Some(120));
    assert_eq!(found.duration, input.duration);
    assert_eq!(found.status, "active");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_explicit_name_is_kept(pool: PgPool) {
    let input = CreateEvent {
        event_name: Some("Winter Gala".to_string()),
        ..new_event("gala")
    };
    let created = EventRepo::create(&pool, &owner(), &input).await.unwrap();
    assert_eq!(created.event_name.as_deref(), Some("Winter Gala"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_missing_event_returns_none(pool: PgPool) {
    let found = EventRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_owner_without_events_is_empty(pool: PgPool) {
    let events = EventRepo::list_for_owner(&pool, &owner()).await.unwrap();
    assert!(events.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_for_owner_is_scoped_and_newest_first(pool: PgPool) {
    let alice = owner();
    let bob = owner();

    let first = EventRepo::create(&pool, &alice, &new_event("workshop"))
        .await
        .unwrap();
    let second = EventRepo::create(&pool, &alice, &new_event("meetup"))
        .await
        .unwrap();
    EventRepo::create(&pool, &bob, &new_event("wedding"))
        .await
        .unwrap();

    let events = EventRepo::list_for_owner(&pool, &alice).await.unwrap();
    let ids: Vec<i64> = events.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_applies_only_given_fields(pool: PgPool) {
    let created = EventRepo::create(&pool, &owner(), &new_event("festival"))
        .await
        .unwrap();

    let update = UpdateEvent {
        city: Some("Lisbon".to_string()),
        audience_size: Some(300),
        ..Default::default()
    };
    let updated = EventRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .expect("event should exist");

    assert_eq!(updated.city.as_deref(), Some("Lisbon"));
    assert_eq!(updated.audience_size, Some(300));
    assert_eq!(updated.location, created.location);
    assert_eq!(updated.status, "active");
    assert!(updated.updated_at >= created.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_is_idempotent(pool: PgPool) {
    let created = EventRepo::create(&pool, &owner(), &new_event("retreat"))
        .await
        .unwrap();

    let update = UpdateEvent {
        event_name: Some("Team Retreat".to_string()),
        status: Some("completed".to_string()),
        ..Default::default()
    };
    let once = EventRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .unwrap();
    let twice = EventRepo::update(&pool, created.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(once.event_name, twice.event_name);
    assert_eq!(once.status, twice.status);
    assert_eq!(once.city, twice.city);
    assert_eq!(once.event_date, twice.event_date);
    assert_eq!(once.created_at, twice.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_event_returns_none(pool: PgPool) {
    let update = UpdateEvent {
        city: Some("Nowhere".to_string()),
        ..Default::default()
    };
    let result = EventRepo::update(&pool, 999_999, &update).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_removes_event(pool: PgPool) {
    let created = EventRepo::create(&pool, &owner(), &new_event("launch"))
        .await
        .unwrap();

    EventRepo::delete(&pool, created.id).await.unwrap();

    assert!(EventRepo::find_by_id(&pool, created.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_missing_event_succeeds(pool: PgPool) {
    EventRepo::delete(&pool, 999_999).await.unwrap();
}
