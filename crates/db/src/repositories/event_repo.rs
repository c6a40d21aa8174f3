//! Repository for the `events` table.

use planner_core::identity::Identity;
use planner_core::status::EVENT_ACTIVE;
use planner_core::types::DbId;
use sqlx::PgPool;

use crate::models::event::{CreateEvent, Event, UpdateEvent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, user_id, event_name, event_type, event_description, event_date, event_time, \
    location, city, venue_type, audience_size, duration, status, created_at, updated_at";

/// Provides CRUD operations for events owned by a user.
pub struct EventRepo;

impl EventRepo {
    /// Insert a new event owned by `owner`, returning the created row.
    ///
    /// The name falls back to the event type and the status is always `active`.
    pub async fn create(
        pool: &PgPool,
        owner: &Identity,
        input: &CreateEvent,
    ) -> Result<Event, sqlx::Error> {
        let query = format!(
            "INSERT INTO events
                (user_id, event_name, event_type, event_description, event_date, event_time,
                 location, city, venue_type, audience_size, duration, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(owner.user_id)
            .bind(input.resolved_name())
            .bind(&input.event_type)
            .bind(&input.description)
            .bind(input.date)
            .bind(input.time)
            .bind(&input.location)
            .bind(&input.city)
            .bind(&input.venue_type)
            .bind(input.audience_size)
            .bind(&input.duration)
            .bind(EVENT_ACTIVE)
            .fetch_one(pool)
            .await?;
        tracing::debug!(event_id = event.id, user_id = %owner.user_id, "Event created");
        Ok(event)
    }

    /// List every event owned by `owner`, most recently created first.
    pub async fn list_for_owner(
        pool: &PgPool,
        owner: &Identity,
    ) -> Result<Vec<Event>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM events
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Event>(&query)
            .bind(owner.user_id)
            .fetch_all(pool)
            .await
    }

    /// Find an event by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Event>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM events WHERE id = $1");
        sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Update an event. Only non-`None` fields in `input` are applied and
    /// `updated_at` is stamped with the current time.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEvent,
    ) -> Result<Option<Event>, sqlx::Error> {
        let query = format!(
            "UPDATE events SET
                event_name = COALESCE($2, event_name),
                event_type = COALESCE($3, event_type),
                event_description = COALESCE($4, event_description),
                event_date = COALESCE($5, event_date),
                event_time = COALESCE($6, event_time),
                location = COALESCE($7, location),
                city = COALESCE($8, city),
                venue_type = COALESCE($9, venue_type),
                audience_size = COALESCE($10, audience_size),
                duration = COALESCE($11, duration),
                status = COALESCE($12, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let event = sqlx::query_as::<_, Event>(&query)
            .bind(id)
            .bind(&input.event_name)
            .bind(&input.event_type)
            .bind(&input.event_description)
            .bind(input.event_date)
            .bind(input.event_time)
            .bind(&input.location)
            .bind(&input.city)
            .bind(&input.venue_type)
            .bind(input.audience_size)
            .bind(&input.duration)
            .bind(&input.status)
            .fetch_optional(pool)
            .await?;
        tracing::debug!(event_id = id, found = event.is_some(), "Event updated");
        Ok(event)
    }

    /// Delete an event by ID. Deleting a missing event is not an error.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        let result = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        tracing::debug!(event_id = id, rows = result.rows_affected(), "Event deleted");
        Ok(())
    }
}
