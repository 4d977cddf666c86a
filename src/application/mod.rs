//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Commands (create, import, sign-out) are kept apart from queries (get,
//! list, compare).

pub mod handlers;

pub use handlers::auth::{SignOutCommand, SignOutHandler};
pub use handlers::proposal::{
    ComparePlansHandler, ComparePlansQuery, ComparePlansResult, CreateProposalCommand,
    CreateProposalHandler, GetProposalHandler, GetProposalQuery, ImportProposalCommand,
    ImportProposalHandler, ListProposalsHandler, ListProposalsQuery, ProposalError,
};
