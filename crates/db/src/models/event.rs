//! Event entity model and DTOs.

use chrono::{NaiveDate, NaiveTime};
use planner_core::types::{DbId, Timestamp, UserId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An event row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub user_id: UserId,
    pub event_name: Option<String>,
    pub event_type: Option<String>,
    pub event_description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub venue_type: Option<String>,
    pub audience_size: Option<i32>,
    pub duration: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new event, as submitted by the planning form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEvent {
    /// Falls back to `event_type` if omitted or empty.
    pub event_name: Option<String>,
    pub event_type: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub venue_type: Option<String>,
    pub audience_size: Option<i32>,
    pub duration: Option<String>,
}

impl CreateEvent {
    /// The name to store: the explicit name, or the event type when none was given.
    pub fn resolved_name(&self) -> Option<&str> {
        self.event_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or(self.event_type.as_deref())
    }
}

/// DTO for updating an existing event. All fields are optional; keys
/// outside this list are rejected.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateEvent {
    pub event_name: Option<String>,
    pub event_type: Option<String>,
    pub event_description: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub city: Option<String>,
    pub venue_type: Option<String>,
    pub audience_size: Option<i32>,
    pub duration: Option<String>,
    pub status: Option<String>,
}
