//! Task entity model and DTOs.

use chrono::NaiveDate;
use planner_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task row from the `tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub event_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub assigned_to: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new task under an event.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `"pending"` if omitted.
    pub status: Option<String>,
    /// Defaults to `"medium"` if omitted.
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
}

/// DTO for updating an existing task. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub assigned_to: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub category: Option<String>,
}
