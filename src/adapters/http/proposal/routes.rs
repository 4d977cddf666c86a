//! HTTP routes for proposal endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    compare_plans, create_proposal, get_proposal, get_template, import_proposal, list_proposals,
    ProposalHandlers,
};

/// Creates the proposal router. Mounted under `/api/proposals`.
pub fn proposal_routes(handlers: ProposalHandlers) -> Router {
    Router::new()
        .route("/", get(list_proposals).post(create_proposal))
        .route("/template", get(get_template))
        .route("/import", post(import_proposal))
        .route("/:id", get(get_proposal))
        .route("/:id/comparison", get(compare_plans))
        .with_state(handlers)
}
