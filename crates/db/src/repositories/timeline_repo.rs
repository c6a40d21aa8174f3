//! Repository for the `timelines` table.

use planner_core::types::DbId;
use sqlx::PgPool;

use crate::models::timeline::{CreateTimelineEntry, TimelineEntry};

const COLUMNS: &str = "\
    id, event_id, title, type, start_time, duration, location_detail, attendees_count, \
    description, resources, assigned_to, notes, created_at, updated_at";

/// Provides insert and ordered listing for an event's schedule.
pub struct TimelineRepo;

impl TimelineRepo {
    /// Insert a timeline entry, returning the created row.
    pub async fn create(
        pool: &PgPool,
        event_id: DbId,
        input: &CreateTimelineEntry,
    ) -> Result<TimelineEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO timelines
                (event_id, title, type, start_time, duration, location_detail,
                 attendees_count, description, resources, assigned_to, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, TimelineEntry>(&query)
            .bind(event_id)
            .bind(&input.title)
            .bind(&input.entry_type)
            .bind(input.start_time)
            .bind(input.duration)
            .bind(&input.location)
            .bind(input.attendees)
            .bind(&input.description)
            .bind(&input.resources)
            .bind(&input.assigned_to)
            .bind(&input.notes)
            .fetch_one(pool)
            .await?;
        tracing::debug!(event_id, entry_id = entry.id, "Timeline entry created");
        Ok(entry)
    }

    /// List an event's timeline ordered by start time, earliest first.
    pub async fn list_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<TimelineEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM timelines
             WHERE event_id = $1
             ORDER BY start_time ASC, id ASC"
        );
        sqlx::query_as::<_, TimelineEntry>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }
}
