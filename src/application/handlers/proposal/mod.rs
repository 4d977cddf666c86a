//! Proposal command and query handlers.

mod compare_plans;
mod create_proposal;
mod error;
mod get_proposal;
mod import_proposal;
mod list_proposals;

pub use compare_plans::{ComparePlansHandler, ComparePlansQuery, ComparePlansResult};
pub use create_proposal::{CreateProposalCommand, CreateProposalHandler};
pub use error::ProposalError;
pub use get_proposal::{GetProposalHandler, GetProposalQuery};
pub use import_proposal::{ImportProposalCommand, ImportProposalHandler};
pub use list_proposals::{ListProposalsHandler, ListProposalsQuery};
