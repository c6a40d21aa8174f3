//! Repository for the `budgets` table.

use planner_core::types::DbId;
use sqlx::PgPool;

use crate::models::budget::{Budget, InvalidAmount, SaveBudget};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "\
    id, event_id, venue_cost, catering_cost, services_cost, miscellaneous_cost, \
    grand_total, budget_details, created_at, updated_at";

/// Provides save and lookup for the single budget attached to an event.
pub struct BudgetRepo;

impl BudgetRepo {
    /// Insert or replace the budget for `event_id`, returning the stored row.
    ///
    /// A single `ON CONFLICT (event_id)` statement, so concurrent first
    /// saves for the same event converge on one row. Falsy category
    /// totals are stored as zero; a total that is not a number fails with
    /// `sqlx::Error::Encode` before anything is sent.
    pub async fn save(
        pool: &PgPool,
        event_id: DbId,
        input: &SaveBudget,
    ) -> Result<Budget, sqlx::Error> {
        let query = format!(
            "INSERT INTO budgets
                (event_id, venue_cost, catering_cost, services_cost,
                 miscellaneous_cost, grand_total, budget_details)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (event_id)
             DO UPDATE SET
                venue_cost = EXCLUDED.venue_cost,
                catering_cost = EXCLUDED.catering_cost,
                services_cost = EXCLUDED.services_cost,
                miscellaneous_cost = EXCLUDED.miscellaneous_cost,
                grand_total = EXCLUDED.grand_total,
                budget_details = EXCLUDED.budget_details,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        let encode = |e: InvalidAmount| sqlx::Error::Encode(Box::new(e));
        let venue = input.venue_cost().map_err(encode)?;
        let catering = input.catering_cost().map_err(encode)?;
        let services = input.services_cost().map_err(encode)?;
        let miscellaneous = input.miscellaneous_cost().map_err(encode)?;
        let grand_total = input.grand_total().map_err(encode)?;

        let budget = sqlx::query_as::<_, Budget>(&query)
            .bind(event_id)
            .bind(venue)
            .bind(catering)
            .bind(services)
            .bind(miscellaneous)
            .bind(grand_total)
            .bind(input.details())
            .fetch_one(pool)
            .await?;
        tracing::debug!(
            event_id,
            budget_id = budget.id,
            grand_total = budget.grand_total,
            "Budget saved"
        );
        Ok(budget)
    }

    /// Find the budget for an event.
    pub async fn find_by_event(
        pool: &PgPool,
        event_id: DbId,
    ) -> Result<Option<Budget>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM budgets WHERE event_id = $1");
        sqlx::query_as::<_, Budget>(&query)
            .bind(event_id)
            .fetch_optional(pool)
            .await
    }
}
