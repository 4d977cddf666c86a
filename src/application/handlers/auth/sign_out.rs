//! SignOutHandler - Command handler for ending the caller's session.

use std::sync::Arc;

use crate::domain::foundation::{AuthError, UserId};
use crate::ports::IdentityProvider;

/// Command to end the session behind `token`.
#[derive(Debug, Clone)]
pub struct SignOutCommand {
    pub user_id: UserId,
    pub token: String,
}

/// Handler for signing out.
pub struct SignOutHandler {
    identity: Arc<dyn IdentityProvider>,
}

impl SignOutHandler {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub async fn handle(&self, cmd: SignOutCommand) -> Result<(), AuthError> {
        self.identity.sign_out(&cmd.token).await?;
        tracing::info!(user_id = %cmd.user_id, "User signed out");
        Ok(())
    }
}
