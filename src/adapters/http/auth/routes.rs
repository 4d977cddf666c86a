//! HTTP routes for session endpoints.

use axum::{routing::post, Router};

use super::handlers::{sign_out, AuthHandlers};

/// Creates the session router. Mounted under `/api/auth`.
pub fn auth_routes(handlers: AuthHandlers) -> Router {
    Router::new()
        .route("/sign-out", post(sign_out))
        .with_state(handlers)
}
