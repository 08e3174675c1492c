use thiserror::Error;

/// Top-level error for dashboard overview queries
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OverviewError {
    /// Storage failure, already logged; carries only the generic message
    #[error("{0}")]
    QueryFailure(String),
}
