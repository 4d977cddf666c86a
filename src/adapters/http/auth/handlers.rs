//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::adapters::http::middleware::{auth_error_response, RequireAuth, SessionToken};
use crate::application::{SignOutCommand, SignOutHandler};

#[derive(Clone)]
pub struct AuthHandlers {
    sign_out_handler: Arc<SignOutHandler>,
}

impl AuthHandlers {
    pub fn new(sign_out_handler: Arc<SignOutHandler>) -> Self {
        Self { sign_out_handler }
    }
}

/// POST /api/auth/sign-out - End the caller's session
pub async fn sign_out(
    State(handlers): State<AuthHandlers>,
    RequireAuth(user): RequireAuth,
    SessionToken(token): SessionToken,
) -> Response {
    let cmd = SignOutCommand {
        user_id: user.id,
        token,
    };

    match handlers.sign_out_handler.handle(cmd).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => auth_error_response(&e),
    }
}
