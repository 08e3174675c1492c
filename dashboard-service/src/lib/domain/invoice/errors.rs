use thiserror::Error;

/// Error for InvoiceId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvoiceIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for invoice status parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvoiceStatusError {
    #[error("Unknown invoice status: {0}")]
    Unknown(String),
}

/// Top-level error for invoice queries
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvoiceError {
    #[error("Invalid invoice ID: {0}")]
    InvalidInvoiceId(#[from] InvoiceIdError),

    #[error("Invoice not found: {0}")]
    NotFound(String),

    /// Storage failure, already logged; carries only the generic message
    #[error("{0}")]
    QueryFailure(String),
}
