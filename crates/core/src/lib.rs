//! Shared types for the event planner data-access layer.

pub mod error;
pub mod identity;
pub mod status;
pub mod types;
