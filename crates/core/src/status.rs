//! Well-known status and priority values stored in TEXT columns.
//!
//! The column defaults in the migrations use the same literals.

/// Every newly created event starts out active.
pub const EVENT_ACTIVE: &str = "active";

/// Default status for a task created without one.
pub const TASK_PENDING: &str = "pending";

/// Default priority for a task created without one.
pub const TASK_PRIORITY_MEDIUM: &str = "medium";

/// Default status for a marketing material created without one.
pub const MATERIAL_DRAFT: &str = "draft";

/// Return `value` unless it is missing or empty, otherwise `default`.
pub fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}
