/// Failures while configuring or bootstrapping the database layer.
///
/// Store operations themselves return `sqlx::Error` untouched.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {key}: {value}")]
    InvalidVar { key: &'static str, value: String },

    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}
