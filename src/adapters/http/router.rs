//! Assembles the full API router from its ports.

use std::sync::Arc;

use axum::{middleware, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::application::{
    ComparePlansHandler, CreateProposalHandler, GetProposalHandler, ImportProposalHandler,
    ListProposalsHandler, SignOutHandler,
};
use crate::ports::{IdentityProvider, ProposalRepository};

use super::auth::{auth_routes, AuthHandlers};
use super::middleware::auth_middleware;
use super::proposal::{proposal_routes, ProposalHandlers};

/// Builds every route behind the auth middleware.
///
/// Transport layers (CORS, timeouts, tracing) are added by the binary.
pub fn api_router(
    repository: Arc<dyn ProposalRepository>,
    identity: Arc<dyn IdentityProvider>,
    importer: ImportProposalHandler,
) -> Router {
    let proposals = ProposalHandlers::new(
        Arc::new(CreateProposalHandler::new(repository.clone())),
        Arc::new(GetProposalHandler::new(repository.clone())),
        Arc::new(ListProposalsHandler::new(repository.clone())),
        Arc::new(importer),
        Arc::new(ComparePlansHandler::new(repository)),
    );
    let auth = AuthHandlers::new(Arc::new(SignOutHandler::new(identity.clone())));

    Router::new()
        .route("/health", get(health))
        .nest("/api/proposals", proposal_routes(proposals))
        .nest("/api/auth", auth_routes(auth))
        .layer(middleware::from_fn_with_state(identity, auth_middleware))
}

/// GET /health - Liveness probe
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
