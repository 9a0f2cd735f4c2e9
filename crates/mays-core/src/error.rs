//! Domain-level error types.

use thiserror::Error;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: String },

    /// The request names a target that does not exist.
    #[error("Invalid target: no {entity_type} with id {id}")]
    InvalidTarget { entity_type: &'static str, id: String },

    /// A lookup that must match exactly one row matched none.
    #[error("Lookup failed: expected one {entity_type} with id {id}, found none")]
    LookupFailed { entity_type: &'static str, id: String },

    #[error("Acting user does not own this {0}")]
    Forbidden(&'static str),

    #[error("Acting user could not be resolved")]
    Unauthorized,

    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// The row changed or vanished between read and write.
    #[error("Concurrent modification: {0}")]
    Conflict(String),
}
