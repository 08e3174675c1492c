use thiserror::Error;

/// Error returned by every storage adapter.
///
/// Services never pass this to callers unchanged; they log it once and
/// replace it with a generic per-operation message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Corrupt {table} row: {reason}")]
    CorruptRow { table: &'static str, reason: String },
}

impl StorageError {
    /// Log this failure once and return the generic message shown to callers.
    pub fn report(self, message: &'static str) -> String {
        tracing::error!(error = %self, "{}", message);
        message.to_string()
    }
}
