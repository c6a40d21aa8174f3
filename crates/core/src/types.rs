/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Authenticated users are identified by the auth provider's UUID.
pub type UserId = uuid::Uuid;
