//! HTTP handlers for proposal endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::adapters::http::middleware::RequireAuth;
use crate::application::{
    ComparePlansHandler, ComparePlansQuery, CreateProposalCommand, CreateProposalHandler,
    GetProposalHandler, GetProposalQuery, ImportProposalCommand, ImportProposalHandler,
    ListProposalsHandler, ListProposalsQuery, ProposalError,
};
use crate::domain::foundation::ProposalId;
use crate::domain::import::ImportError;
use crate::domain::proposal::ProposalDocument;

use super::dto::{
    ComparisonResponse, CreateProposalRequest, ImportProposalRequest, ImportProposalResponse,
    ListProposalsParams, ProposalListResponse, ProposalResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ProposalHandlers {
    create_handler: Arc<CreateProposalHandler>,
    get_handler: Arc<GetProposalHandler>,
    list_handler: Arc<ListProposalsHandler>,
    import_handler: Arc<ImportProposalHandler>,
    compare_handler: Arc<ComparePlansHandler>,
}

impl ProposalHandlers {
    pub fn new(
        create_handler: Arc<CreateProposalHandler>,
        get_handler: Arc<GetProposalHandler>,
        list_handler: Arc<ListProposalsHandler>,
        import_handler: Arc<ImportProposalHandler>,
        compare_handler: Arc<ComparePlansHandler>,
    ) -> Self {
        Self {
            create_handler,
            get_handler,
            list_handler,
            import_handler,
            compare_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/proposals - List proposals, newest first unless `order` says otherwise
pub async fn list_proposals(
    State(handlers): State<ProposalHandlers>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<ListProposalsParams>,
) -> Response {
    let query = ListProposalsQuery {
        order: params.order,
    };

    match handlers.list_handler.handle(query).await {
        Ok(proposals) => {
            let response: ProposalListResponse = proposals.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_proposal_error(e),
    }
}

/// POST /api/proposals - Save a new draft proposal
pub async fn create_proposal(
    State(handlers): State<ProposalHandlers>,
    RequireAuth(user): RequireAuth,
    Json(req): Json<CreateProposalRequest>,
) -> Response {
    let cmd = CreateProposalCommand {
        user_id: user.id,
        document: req,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(proposal) => {
            let response: ProposalResponse = proposal.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_proposal_error(e),
    }
}

/// GET /api/proposals/template - Sample document to start an import from
pub async fn get_template(RequireAuth(_user): RequireAuth) -> Response {
    (StatusCode::OK, Json(ProposalDocument::sample_template())).into_response()
}

/// POST /api/proposals/import - Populate a document from pasted JSON
pub async fn import_proposal(
    State(handlers): State<ProposalHandlers>,
    RequireAuth(_user): RequireAuth,
    Json(req): Json<ImportProposalRequest>,
) -> Response {
    let cmd = ImportProposalCommand {
        raw: req.text,
        defaults: req.defaults,
    };

    match handlers.import_handler.handle(cmd) {
        Ok(document) => {
            (StatusCode::OK, Json(ImportProposalResponse { document })).into_response()
        }
        Err(e) => handle_proposal_error(e),
    }
}

/// GET /api/proposals/:id - Get one proposal
pub async fn get_proposal(
    State(handlers): State<ProposalHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(proposal_id): Path<String>,
) -> Response {
    let proposal_id = match proposal_id.parse::<ProposalId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response(),
    };

    match handlers.get_handler.handle(GetProposalQuery { proposal_id }).await {
        Ok(proposal) => {
            let response: ProposalResponse = proposal.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_proposal_error(e),
    }
}

/// GET /api/proposals/:id/comparison - Feature matrix across the proposal's plans
pub async fn compare_plans(
    State(handlers): State<ProposalHandlers>,
    RequireAuth(_user): RequireAuth,
    Path(proposal_id): Path<String>,
) -> Response {
    let proposal_id = match proposal_id.parse::<ProposalId>() {
        Ok(id) => id,
        Err(_) => return invalid_id_response(),
    };

    match handlers
        .compare_handler
        .handle(ComparePlansQuery { proposal_id })
        .await
    {
        Ok(result) => {
            let response: ComparisonResponse = result.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_proposal_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn invalid_id_response() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse::bad_request("Invalid proposal ID")),
    )
        .into_response()
}

fn handle_proposal_error(error: ProposalError) -> Response {
    let body = ErrorResponse::new(error.code(), error.client_message());

    match &error {
        ProposalError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Proposal", &id.to_string())),
        )
            .into_response(),
        ProposalError::Import(ImportError::Parse { line, column, .. }) => (
            StatusCode::BAD_REQUEST,
            Json(body.with_details(serde_json::json!({ "line": line, "column": column }))),
        )
            .into_response(),
        ProposalError::Import(_) => (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response(),
        ProposalError::PayloadTooLarge { .. } => {
            (StatusCode::PAYLOAD_TOO_LARGE, Json(body)).into_response()
        }
        ProposalError::Validation(_) => (StatusCode::BAD_REQUEST, Json(body)).into_response(),
        ProposalError::Infrastructure(msg) => {
            tracing::error!("Proposal store failure: {}", msg);
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}
