//! Marketing material model and DTO.

use planner_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `marketing_materials` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MarketingMaterial {
    pub id: DbId,
    pub event_id: DbId,
    pub material_type: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub platform: Option<String>,
    pub status: String,
    pub metadata: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving a generated marketing material.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateMaterial {
    /// e.g. `"social_post"`, `"email"`, `"flyer"`. Stored as `material_type`.
    #[serde(rename = "type")]
    pub material_type: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub platform: Option<String>,
    /// Defaults to `"draft"` if omitted.
    pub status: Option<String>,
    pub metadata: Option<serde_json::Value>,
}
