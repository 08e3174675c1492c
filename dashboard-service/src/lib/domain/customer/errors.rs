use thiserror::Error;

/// Top-level error for customer queries
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CustomerError {
    /// Storage failure, already logged; carries only the generic message
    #[error("{0}")]
    QueryFailure(String),
}
