//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every method issues a
//! single statement and hands `sqlx::Error` back unchanged.

pub mod budget_repo;
pub mod event_repo;
pub mod marketing_repo;
pub mod task_repo;
pub mod timeline_repo;

pub use budget_repo::BudgetRepo;
pub use event_repo::EventRepo;
pub use marketing_repo::MarketingRepo;
pub use task_repo::TaskRepo;
pub use timeline_repo::TimelineRepo;
