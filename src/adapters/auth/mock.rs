//! Mock identity provider for testing.
//!
//! # Example
//!
//! ```ignore
//! use proposal_desk::adapters::auth::MockIdentityProvider;
//!
//! let identity = MockIdentityProvider::new().with_test_user("valid-token", "user-123");
//! let user = identity.current_user("valid-token").await?;
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::foundation::{AuthError, AuthenticatedUser, UserId};
use crate::ports::IdentityProvider;

/// Maps tokens to users. Unknown tokens return `InvalidToken`.
#[derive(Debug, Default)]
pub struct MockIdentityProvider {
    tokens: RwLock<HashMap<String, AuthenticatedUser>>,
    signed_out: RwLock<HashSet<String>>,
    /// Optional error to return for every call
    force_error: RwLock<Option<AuthError>>,
}

impl MockIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a valid token that maps to a user.
    pub fn with_user(self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.tokens.write().unwrap().insert(token.into(), user);
        self
    }

    /// Adds a valid token with a generated test user.
    pub fn with_test_user(self, token: impl Into<String>, user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        let user = AuthenticatedUser::new(
            UserId::new(&user_id).unwrap(),
            format!("{}@test.example.com", user_id),
            None,
        );
        self.with_user(token, user)
    }

    /// Forces every call to fail with `error`.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// True once `token` has been signed out.
    pub fn is_signed_out(&self, token: &str) -> bool {
        self.signed_out.read().unwrap().contains(token)
    }

    fn check_forced_error(&self) -> Result<(), AuthError> {
        match self.force_error.read().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn current_user(&self, token: &str) -> Result<Option<AuthenticatedUser>, AuthError> {
        self.check_forced_error()?;

        if self.is_signed_out(token) {
            return Ok(None);
        }

        self.tokens
            .read()
            .unwrap()
            .get(token)
            .cloned()
            .map(Some)
            .ok_or(AuthError::InvalidToken)
    }

    async fn sign_out(&self, token: &str) -> Result<(), AuthError> {
        self.check_forced_error()?;

        if !self.tokens.read().unwrap().contains_key(token) {
            return Err(AuthError::InvalidToken);
        }
        self.signed_out.write().unwrap().insert(token.to_string());
        Ok(())
    }
}
