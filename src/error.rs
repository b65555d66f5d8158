use sea_orm::SqlErr;
use std::fmt;

/// Error type shared by the schema initializer and both repositories.
#[derive(Debug)]
pub enum StoreError {
    /// Uniqueness or not-null violation reported by the store
    ConstraintViolation(String),
    /// Delete or lookup target absent
    NotFound(String),
    /// Store inaccessible, or the schema was never initialized
    StoreUnavailable(String),
    /// Input rejected by a validation helper before reaching the store
    Validation(String),
    /// Any other store-level failure
    Database(String),
    /// Non-store failure (e.g. password hashing)
    Internal(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConstraintViolation(msg) => write!(f, "Constraint violation: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::StoreUnavailable(msg) => write!(f, "Store unavailable: {msg}"),
            Self::Validation(msg) => write!(f, "Validation error: {msg}"),
            Self::Database(msg) => write!(f, "Database error: {msg}"),
            Self::Internal(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Convert `SeaORM` database errors to `StoreError`.
///
/// Unique and foreign-key violations become `ConstraintViolation`; connection
/// and pool-acquire failures become `StoreUnavailable` so callers can tell a
/// broken store apart from a rejected statement.
impl From<sea_orm::DbErr> for StoreError {
    fn from(err: sea_orm::DbErr) -> Self {
        if let Some(
            SqlErr::UniqueConstraintViolation(msg) | SqlErr::ForeignKeyConstraintViolation(msg),
        ) = err.sql_err()
        {
            return Self::ConstraintViolation(msg);
        }
        match err {
            sea_orm::DbErr::Conn(e) => Self::StoreUnavailable(e.to_string()),
            sea_orm::DbErr::ConnectionAcquire(e) => Self::StoreUnavailable(e.to_string()),
            other => Self::Database(other.to_string()),
        }
    }
}

/// Convert anyhow errors to `StoreError`.
impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}
