//! Custom error types for the common library
//!
//! `DatabaseError` covers bootstrapping the connection pool and schema,
//! `StoreError` covers the read/write operations repositories perform once the
//! service is running.

use sqlx::Error as SqlxError;
use thiserror::Error;

/// Custom error type for database operations
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error occurred during database connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Error occurred during database query execution
    #[error("Database query error: {0}")]
    Query(#[source] SqlxError),

    /// Error occurred during database migration
    #[error("Database migration error: {0}")]
    Migration(String),

    /// Configuration error
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Error returned by repository operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// A unique key already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Any other failure reported by the backing store
    #[error("Store error: {0}")]
    Database(#[from] SqlxError),
}

impl StoreError {
    /// Classify a sqlx error, turning unique-index violations into `Conflict`
    pub fn from_sqlx(err: SqlxError, conflict_message: &str) -> Self {
        let is_unique_violation = err
            .as_database_error()
            .is_some_and(|db_err| db_err.is_unique_violation());

        if is_unique_violation {
            StoreError::Conflict(conflict_message.to_string())
        } else {
            StoreError::Database(err)
        }
    }
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_a_conflict() {
        let err = StoreError::from_sqlx(SqlxError::RowNotFound, "duplicate");
        assert!(matches!(err, StoreError::Database(SqlxError::RowNotFound)));
    }

    #[test]
    fn test_conflict_message() {
        let err = StoreError::Conflict("User already exists".to_string());
        assert_eq!(err.to_string(), "Conflict: User already exists");
    }
}
