//! Authentication utilities library
//!
//! Provides the password side of login for the dashboard service:
//! - Password hashing (Argon2id, salted, PHC string format)
//! - Password verification against a stored hash
//!
//! Sessions and tokens are deliberately absent; callers decide what an
//! accepted login grants.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Login Check
//! ```
//! use auth::{AuthenticationError, Authenticator};
//!
//! let auth = Authenticator::new().unwrap();
//! let hash = auth.hash_password("password123").unwrap();
//!
//! assert!(auth.verify_password("password123", &hash).is_ok());
//! assert_eq!(
//!     auth.verify_password("password124", &hash),
//!     Err(AuthenticationError::InvalidCredentials)
//! );
//! ```

pub mod authenticator;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use password::PasswordParams;
