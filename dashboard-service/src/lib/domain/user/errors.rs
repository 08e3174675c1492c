use thiserror::Error;

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for login input that fails shape validation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password too short: minimum {min} characters, got {actual}")]
    PasswordTooShort { min: usize, actual: usize },
}

/// Error for login attempts that could not be decided
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Storage failure while resolving the user, already logged
    #[error("{0}")]
    LookupFailure(String),
}
