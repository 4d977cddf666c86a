//! HTTP adapter for proposal endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ComparisonResponse, ComparisonRowResponse, CreateProposalRequest, ImportProposalRequest,
    ImportProposalResponse, ListProposalsParams, ProposalListResponse, ProposalResponse,
};
pub use handlers::ProposalHandlers;
pub use routes::proposal_routes;
