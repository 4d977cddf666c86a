//! Ports - contracts between the application and infrastructure.

mod identity_provider;
mod proposal_repository;

pub use identity_provider::IdentityProvider;
pub use proposal_repository::{ProposalOrder, ProposalRepository};
