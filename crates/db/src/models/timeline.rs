//! Timeline entry model and DTO.

use chrono::NaiveTime;
use planner_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `timelines` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TimelineEntry {
    pub id: DbId,
    pub event_id: DbId,
    pub title: String,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub start_time: NaiveTime,
    /// Minutes.
    pub duration: Option<i32>,
    pub location_detail: Option<String>,
    pub attendees_count: Option<i32>,
    pub description: Option<String>,
    pub resources: Option<serde_json::Value>,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for adding an entry to an event's timeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimelineEntry {
    pub title: String,
    #[serde(rename = "type")]
    pub entry_type: Option<String>,
    pub start_time: NaiveTime,
    pub duration: Option<i32>,
    /// Stored as `location_detail`.
    pub location: Option<String>,
    /// Stored as `attendees_count`.
    pub attendees: Option<i32>,
    pub description: Option<String>,
    pub resources: Option<serde_json::Value>,
    pub assigned_to: Option<String>,
    pub notes: Option<String>,
}
