use std::fmt;

use email_address::Options;
use uuid::Uuid;

use crate::user::errors::CredentialsError;
use crate::user::errors::EmailError;

/// User entity.
///
/// Read-only here; users are provisioned elsewhere.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: EmailAddress,
    pub password_hash: String,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// A bare `local@domain` address: no display name, no quoted local part, no
/// domain literal, and a domain with at least two labels. The original
/// spelling is kept because lookups match it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email is not a bare, routable address
    pub fn new(email: String) -> Result<Self, EmailError> {
        let options = Options::default()
            .with_required_tld()
            .without_domain_literal()
            .without_display_text();
        let parsed = email_address::EmailAddress::parse_with_options(&email, options)
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))?;

        if parsed.email() != email {
            return Err(EmailError::InvalidFormat(
                "address must not carry a display name".to_string(),
            ));
        }
        if parsed.local_part().starts_with('"') {
            return Err(EmailError::InvalidFormat(
                "quoted local part is not accepted".to_string(),
            ));
        }

        Ok(EmailAddress(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Plaintext password supplied with a login attempt.
///
/// Never printed; `Debug` is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MIN_LENGTH: usize = 6;

    /// Accept a password of at least six characters.
    ///
    /// # Errors
    /// * `PasswordTooShort` - Fewer than six characters
    pub fn new(password: String) -> Result<Self, CredentialsError> {
        let length = password.chars().count();
        if length < Self::MIN_LENGTH {
            return Err(CredentialsError::PasswordTooShort {
                min: Self::MIN_LENGTH,
                actual: length,
            });
        }
        Ok(Self(password))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Login input that passed shape validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: EmailAddress,
    pub password: Password,
}

impl Credentials {
    /// Validate raw login input.
    ///
    /// # Errors
    /// * `InvalidEmail` - Email is not a syntactically valid address
    /// * `PasswordTooShort` - Password has fewer than six characters
    pub fn parse(email: &str, password: &str) -> Result<Self, CredentialsError> {
        Ok(Self {
            email: EmailAddress::new(email.to_string())?,
            password: Password::new(password.to_string())?,
        })
    }
}

/// Terminal state of a login attempt.
///
/// Unknown email, malformed input and wrong password all collapse into
/// `Rejected`, so callers cannot tell which one happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Accepted(User),
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_parse_success() {
        let credentials = Credentials::parse("user@nextmail.com", "123456").unwrap();
        assert_eq!(credentials.email.as_str(), "user@nextmail.com");
        assert_eq!(credentials.password.expose(), "123456");
    }

    #[test]
    fn test_credentials_reject_invalid_email() {
        let result = Credentials::parse("not-an-email", "validpw1");
        assert!(matches!(result, Err(CredentialsError::InvalidEmail(_))));
    }

    #[test]
    fn test_credentials_reject_non_bare_addresses() {
        for email in [
            "a@b",
            "user@localhost",
            "\"a b\"@x.com",
            "a@[127.0.0.1]",
            "Name <a@b.com>",
        ] {
            let result = Credentials::parse(email, "validpw1");
            assert!(
                matches!(result, Err(CredentialsError::InvalidEmail(_))),
                "{}",
                email
            );
        }
    }

    #[test]
    fn test_credentials_reject_short_password() {
        let result = Credentials::parse("a@b.com", "short");
        assert_eq!(
            result,
            Err(CredentialsError::PasswordTooShort { min: 6, actual: 5 })
        );
    }

    #[test]
    fn test_password_length_counts_characters() {
        assert!(Password::new("pässwö".to_string()).is_ok());
        assert!(Password::new("ääääa".to_string()).is_err());
    }

    #[test]
    fn test_email_keeps_original_case() {
        let email = EmailAddress::new("Known@B.com".to_string()).unwrap();
        assert_eq!(email.as_str(), "Known@B.com");
    }

    #[test]
    fn test_debug_output_hides_secrets() {
        let user = User {
            id: UserId::new(),
            name: "User".to_string(),
            email: EmailAddress::new("user@nextmail.com".to_string()).unwrap(),
            password_hash: "$argon2id$v=19$secret".to_string(),
        };
        let password = Password::new("123456".to_string()).unwrap();

        assert!(!format!("{:?}", user).contains("argon2id"));
        assert_eq!(format!("{:?}", password), "Password(***)");
    }
}
