//! Authentication middleware and extractors for axum.
//!
//! This module provides:
//! - `auth_middleware` - Layer that resolves Bearer tokens and injects the user into extensions
//! - `RequireAuth` - Extractor that requires a signed-in user
//! - `SessionToken` - Extractor for the raw token, used by sign-out
//!
//! ```text
//! Request → auth_middleware → injects AuthenticatedUser + SessionToken into extensions
//!                                      ↓
//!                              Handler → RequireAuth extractor reads from extensions
//! ```
//!
//! # Example
//!
//! ```ignore
//! let identity: Arc<dyn IdentityProvider> = Arc::new(MockIdentityProvider::new());
//!
//! let app = Router::new()
//!     .route("/api/protected", get(protected_handler))
//!     .layer(middleware::from_fn_with_state(identity.clone(), auth_middleware));
//!
//! async fn protected_handler(RequireAuth(user): RequireAuth) -> String {
//!     format!("Hello, {}!", user.email)
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::{AuthError, AuthenticatedUser};
use crate::ports::IdentityProvider;

/// Auth middleware state - wraps the identity provider.
pub type AuthState = Arc<dyn IdentityProvider>;

/// Authentication middleware for Bearer tokens.
///
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Resolves it through the `IdentityProvider` port
/// 3. On success, injects `AuthenticatedUser` and `SessionToken` into request extensions
/// 4. On missing token, continues without injecting (public routes stay reachable)
/// 5. On a bad or signed-out token, returns 401 Unauthorized
pub async fn auth_middleware(
    State(identity): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string);

    let Some(token) = token else {
        return next.run(request).await;
    };

    match identity.current_user(&token).await {
        Ok(Some(user)) => {
            request.extensions_mut().insert(user);
            request.extensions_mut().insert(SessionToken(token));
            next.run(request).await
        }
        Ok(None) => auth_error_response(&AuthError::SignedOut),
        Err(e) => auth_error_response(&e),
    }
}

/// Maps identity failures to HTTP responses.
pub fn auth_error_response(error: &AuthError) -> Response {
    let status = match error {
        AuthError::ServiceUnavailable(msg) => {
            tracing::error!("Auth service unavailable: {}", msg);
            StatusCode::SERVICE_UNAVAILABLE
        }
        _ => StatusCode::UNAUTHORIZED,
    };
    let message = match error {
        AuthError::ServiceUnavailable(_) => "Authentication service unavailable".to_string(),
        other => other.to_string(),
    };

    (status, Json(ErrorResponse::unauthorized(message))).into_response()
}

/// Extractor that requires a signed-in user.
///
/// Returns 401 when the auth middleware did not resolve a user.
#[derive(Debug, Clone)]
pub struct RequireAuth(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(RequireAuth)
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// The Bearer token the current user signed in with.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionToken>()
            .cloned()
            .ok_or(AuthRejection::Unauthenticated)
    }
}

/// Rejection type for authentication failures.
#[derive(Debug, Clone)]
pub enum AuthRejection {
    /// No valid authentication token was provided.
    Unauthenticated,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            AuthRejection::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::unauthorized("Authentication required")),
            )
                .into_response(),
        }
    }
}
