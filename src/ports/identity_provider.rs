//! Identity provider port.
//!
//! The hosted identity service issues access tokens; this port turns a token
//! into the signed-in user and ends sessions on sign-out. HTTP middleware is
//! the only caller, so handlers only ever see an `AuthenticatedUser`.

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser};

/// Resolves and ends user sessions.
///
/// # Contract
///
/// Implementations must:
/// - Verify the token signature, audience and expiry
/// - Return `Ok(None)` for a session that has been signed out
/// - Return `AuthError::InvalidToken` for malformed or badly signed tokens
/// - Return `AuthError::TokenExpired` for expired tokens
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// The user behind `token`, or `None` when the session has ended.
    async fn current_user(&self, token: &str) -> Result<Option<AuthenticatedUser>, AuthError>;

    /// Ends the session behind `token`. Signing out twice is not an error.
    async fn sign_out(&self, token: &str) -> Result<(), AuthError>;
}
