use crate::types::DbId;

/// Domain-level error taxonomy shared by the repository and API layers.
///
/// Every variant carries a human-readable message naming the violated rule;
/// none of these are retried internally.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// A transition was requested on an entity that already left the state
    /// the caller saw (e.g. deciding a booking that is no longer pending).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
