//! Repository for the `marketing_materials` table.

use planner_core::status::{or_default, MATERIAL_DRAFT};
use planner_core::types::DbId;
use sqlx::PgPool;

use crate::models::marketing::{CreateMaterial, MarketingMaterial};

const COLUMNS: &str = "\
    id, event_id, material_type, title, content, platform, status, metadata, \
    created_at, updated_at";

pub struct MarketingRepo;

impl MarketingRepo {
    /// Insert a marketing material, returning the created row.
    ///
    /// Status defaults to `draft`.
    pub async fn create(
        pool: &PgPool,
        event_id: DbId,
        input: &CreateMaterial,
    ) -> Result<MarketingMaterial, sqlx::Error> {
        let query = format!(
            "INSERT INTO marketing_materials
                (event_id, material_type, title, content, platform, status, metadata)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let material = sqlx::query_as::<_, MarketingMaterial>(&query)
            .bind(event_id)
            .bind(&input.material_type)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.platform)
            .bind(or_default(input.status.as_deref(), MATERIAL_DRAFT))
            .bind(&input.metadata)
            .fetch_one(pool)
            .await?;
        tracing::debug!(
            event_id,
            material_id = material.id,
            material_type = %material.material_type,
            "Marketing material saved"
        );
        Ok(material)
    }

    /// List an event's marketing materials, most recently created first.
    pub async fn list_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Vec<MarketingMaterial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM marketing_materials
             WHERE event_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, MarketingMaterial>(&query)
            .bind(event_id)
            .fetch_all(pool)
            .await
    }
}
