//! Budget entity model and the budget payload saved per event.
//!
//! The payload is stored twice: the category totals go into numeric
//! columns, and the object exactly as the client sent it is kept in
//! `budget_details`.

use planner_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

/// A row from the `budgets` table. At most one exists per event.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Budget {
    pub id: DbId,
    pub event_id: DbId,
    pub venue_cost: f64,
    pub catering_cost: f64,
    pub services_cost: f64,
    pub miscellaneous_cost: f64,
    pub grand_total: f64,
    pub budget_details: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// The budget object as built by the planning client.
///
/// Kept as raw JSON so nothing is lost on the way to `budget_details`.
/// The category totals are read from `venue.total`, `catering.total`,
/// `services.total`, `miscellaneous.total` and `grandTotal`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SaveBudget(pub Value);

/// A budget amount that is neither falsy nor a number.
#[derive(Debug, thiserror::Error)]
#[error("budget amount `{path}` is not a number: {value}")]
pub struct InvalidAmount {
    pub path: &'static str,
    pub value: Value,
}

impl SaveBudget {
    pub fn new(details: Value) -> Self {
        Self(details)
    }

    pub fn details(&self) -> &Value {
        &self.0
    }

    pub fn venue_cost(&self) -> Result<f64, InvalidAmount> {
        self.category_total("venue", "venue.total")
    }

    pub fn catering_cost(&self) -> Result<f64, InvalidAmount> {
        self.category_total("catering", "catering.total")
    }

    pub fn services_cost(&self) -> Result<f64, InvalidAmount> {
        self.category_total("services", "services.total")
    }

    pub fn miscellaneous_cost(&self) -> Result<f64, InvalidAmount> {
        self.category_total("miscellaneous", "miscellaneous.total")
    }

    pub fn grand_total(&self) -> Result<f64, InvalidAmount> {
        amount(&self.0["grandTotal"], "grandTotal")
    }

    fn category_total(&self, category: &str, path: &'static str) -> Result<f64, InvalidAmount> {
        amount(&self.0[category]["total"], path)
    }
}

impl From<Value> for SaveBudget {
    fn from(details: Value) -> Self {
        Self(details)
    }
}

/// Falsy values (missing, `null`, `false`, `""`, `0`) count as zero.
/// Numbers and numeric strings pass through; anything else is rejected.
fn amount(value: &Value, path: &'static str) -> Result<f64, InvalidAmount> {
    let invalid = || InvalidAmount {
        path,
        value: value.clone(),
    };
    match value {
        Value::Null | Value::Bool(false) => Ok(0.0),
        Value::Number(n) => n.as_f64().ok_or_else(invalid),
        Value::String(s) if s.is_empty() => Ok(0.0),
        Value::String(s) => match s.trim().parse::<f64>() {
            Ok(v) if v.is_nan() => Ok(0.0),
            Ok(v) => Ok(v),
            Err(_) => Err(invalid()),
        },
        Value::Bool(true) | Value::Array(_) | Value::Object(_) => Err(invalid()),
    }
}
