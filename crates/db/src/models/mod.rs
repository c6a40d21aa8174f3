//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO for inserts, shaped like the client payload
//! - For mutable tables, an update DTO (all `Option` fields) for patches

pub mod budget;
pub mod event;
pub mod marketing;
pub mod task;
pub mod timeline;
