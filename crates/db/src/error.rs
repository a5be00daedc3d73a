use delishop_core::error::CoreError;

/// Errors raised by a [`ProductStore`](crate::store::ProductStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A database error from sqlx, including column constraint violations
    /// reported by PostgreSQL.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A column constraint rejected by the in-memory store.
    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("In-memory store lock poisoned")]
    LockPoisoned,
}

impl From<CoreError> for StoreError {
    fn from(err: CoreError) -> Self {
        StoreError::Constraint(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
