use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::password::PasswordParams;

/// Password gate for login attempts.
///
/// Wraps the password hasher and turns a boolean verification into a
/// pass/fail outcome so callers cannot accidentally ignore a mismatch.
///
/// Holds a throwaway hash made with the same cost parameters, so a login for
/// an unknown account costs as much as one for a known account.
#[derive(Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    dummy_hash: String,
}

/// Authentication operation errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),
}

impl Authenticator {
    /// Create an authenticator using default Argon2id parameters.
    ///
    /// # Errors
    /// * `HashingFailed` - The dummy hash could not be computed
    pub fn new() -> Result<Self, PasswordError> {
        Self::from_hasher(PasswordHasher::new())
    }

    /// Create an authenticator whose new hashes use the given cost parameters.
    ///
    /// # Errors
    /// * `InvalidParameters` - Parameters rejected by Argon2
    /// * `HashingFailed` - The dummy hash could not be computed
    pub fn with_params(params: PasswordParams) -> Result<Self, PasswordError> {
        Self::from_hasher(PasswordHasher::with_params(params)?)
    }

    fn from_hasher(password_hasher: PasswordHasher) -> Result<Self, PasswordError> {
        let dummy_hash = password_hasher.hash("dummy-password")?;
        Ok(Self {
            password_hasher,
            dummy_hash,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash could not be parsed
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<(), AuthenticationError> {
        if self.password_hasher.verify(password, stored_hash)? {
            Ok(())
        } else {
            Err(AuthenticationError::InvalidCredentials)
        }
    }

    /// Run a full verification for a login whose account does not exist.
    ///
    /// Always fails with `InvalidCredentials`.
    pub fn verify_without_user(&self, password: &str) -> Result<(), AuthenticationError> {
        let _ = self.password_hasher.verify(password, &self.dummy_hash);
        Err(AuthenticationError::InvalidCredentials)
    }
}
