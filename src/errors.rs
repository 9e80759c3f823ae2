use thiserror::Error;

use crate::models::matches::MatchStatus;

/// Storage failures. Transient from the caller's point of view; never
/// swallowed, always surfaced as a 500.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("corrupted match row: {0}")]
    Corrupted(String),
}

/// Everything that can go wrong with a match operation.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("{0}")]
    Validation(String),

    #[error("Match not found")]
    NotFound,

    #[error("Cannot {action} a match that is {from}")]
    InvalidTransition {
        from: MatchStatus,
        action: &'static str,
    },

    #[error("Match is not live (status: {0})")]
    InvalidState(MatchStatus),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl MatchError {
    /// Classify a failure from the write leg of a read-modify-write. A
    /// row that vanished between the read and the UPDATE is a missing
    /// match, not a store failure.
    pub(crate) fn from_update(error: StoreError) -> Self {
        match error {
            StoreError::Database(sqlx::Error::RowNotFound) => MatchError::NotFound,
            other => MatchError::Store(other),
        }
    }
}
