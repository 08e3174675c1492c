use async_trait::async_trait;

use crate::domain::errors::StorageError;
use crate::user::errors::AuthError;
use crate::user::models::AuthOutcome;
use crate::user::models::EmailAddress;
use crate::user::models::User;

/// Port for login decisions.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Decide a single login attempt.
    ///
    /// # Arguments
    /// * `email` - Raw email as typed by the user
    /// * `password` - Raw plaintext password
    ///
    /// # Returns
    /// `Accepted(user)` when the password matches the stored hash,
    /// `Rejected` for every other expected outcome
    ///
    /// # Errors
    /// * `LookupFailure` - User lookup failed for infrastructure reasons
    async fn authorize(&self, email: &str, password: &str) -> Result<AuthOutcome, AuthError>;
}

/// Read access to users.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by exact email address.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `StorageError` - Database operation failed
    async fn find_by_email(&self, email: &EmailAddress) -> Result<Option<User>, StorageError>;
}
