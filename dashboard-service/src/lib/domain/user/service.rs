use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::user::errors::AuthError;
use crate::user::models::AuthOutcome;
use crate::user::models::Credentials;
use crate::user::ports::AuthServicePort;
use crate::user::ports::UserRepository;

/// Domain service deciding login attempts.
///
/// Validates input shape, resolves the user by exact email and verifies the
/// password against the stored Argon2 hash on the blocking pool.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Authenticator,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>, authenticator: Authenticator) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn authorize(&self, email: &str, password: &str) -> Result<AuthOutcome, AuthError> {
        let credentials = match Credentials::parse(email, password) {
            Ok(credentials) => credentials,
            Err(e) => {
                tracing::debug!(reason = %e, "Login rejected before lookup");
                return Ok(AuthOutcome::Rejected);
            }
        };

        let user = self
            .repository
            .find_by_email(&credentials.email)
            .await
            .map_err(|e| AuthError::LookupFailure(e.report("Failed to fetch user.")))?;

        // Argon2 is CPU-bound; an unknown email still pays for one verification.
        let authenticator = self.authenticator.clone();
        let stored_hash = user.as_ref().map(|user| user.password_hash.clone());
        let password = credentials.password;
        let verification = tokio::task::spawn_blocking(move || match stored_hash {
            Some(hash) => authenticator.verify_password(password.expose(), &hash),
            None => authenticator.verify_without_user(password.expose()),
        })
        .await;

        let verification = match verification {
            Ok(verification) => verification,
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                return Ok(AuthOutcome::Rejected);
            }
        };

        let Some(user) = user else {
            tracing::debug!("Login rejected: invalid credentials");
            return Ok(AuthOutcome::Rejected);
        };

        match verification {
            Ok(()) => {
                tracing::info!(user_id = %user.id, "Login accepted");
                Ok(AuthOutcome::Accepted(user))
            }
            Err(AuthenticationError::InvalidCredentials) => {
                tracing::debug!("Login rejected: invalid credentials");
                Ok(AuthOutcome::Rejected)
            }
            Err(AuthenticationError::PasswordError(e)) => {
                tracing::error!(user_id = %user.id, error = %e, "Stored password hash is unusable");
                Ok(AuthOutcome::Rejected)
            }
        }
    }
}
