//! Proposal repository port.
//!
//! Defines the contract of the document store that holds proposals.
//! Records coming back from the store are trusted to be well shaped;
//! nothing is re-validated on read.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::foundation::{DomainError, ProposalId};
use crate::domain::proposal::{NewProposal, Proposal};

/// Sort orders supported by [`ProposalRepository::find_all`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalOrder {
    /// Newest first. The listing page uses this.
    #[default]
    CreatedAtDesc,
    CreatedAtAsc,
    UpdatedAtDesc,
}

/// Repository port for proposal persistence.
#[async_trait]
pub trait ProposalRepository: Send + Sync {
    /// Stores a new proposal and returns it with its generated id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, proposal: &NewProposal) -> Result<Proposal, DomainError>;

    /// Finds a proposal by id. Returns `None` if not found.
    async fn find_by_id(&self, id: &ProposalId) -> Result<Option<Proposal>, DomainError>;

    /// Returns every proposal in the requested order.
    async fn find_all(&self, order: ProposalOrder) -> Result<Vec<Proposal>, DomainError>;
}
