//! Authentication types for the domain layer.
//!
//! These types describe the signed-in user as seen by the application. They
//! carry no provider dependencies: the hosted identity service populates them
//! through the `IdentityProvider` port.

use super::UserId;
use thiserror::Error;

/// User extracted from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// The unique user identifier from the identity provider.
    pub id: UserId,

    /// User's email address from the token claims.
    pub email: String,

    /// Provider session the token belongs to, used for sign-out.
    pub session_id: Option<String>,
}

impl AuthenticatedUser {
    /// Creates a new authenticated user.
    pub fn new(id: UserId, email: impl Into<String>, session_id: Option<String>) -> Self {
        Self {
            id,
            email: email.into(),
            session_id,
        }
    }
}

/// Authentication errors that can occur during token verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The token is malformed or has an invalid signature.
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The token was valid but has expired.
    #[error("Token expired")]
    TokenExpired,

    /// The session behind the token has been signed out.
    #[error("Session has been signed out")]
    SignedOut,

    /// The identity service is unavailable.
    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl AuthError {
    /// Creates a service unavailable error with a message.
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable(message.into())
    }

    /// Returns true if the caller should sign in again.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(
            self,
            AuthError::InvalidToken | AuthError::TokenExpired | AuthError::SignedOut
        )
    }
}
