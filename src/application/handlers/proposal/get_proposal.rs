//! GetProposalHandler - Query handler for one stored proposal.

use std::sync::Arc;

use crate::domain::foundation::ProposalId;
use crate::domain::proposal::Proposal;
use crate::ports::ProposalRepository;

use super::ProposalError;

/// Query to get a proposal by ID.
#[derive(Debug, Clone)]
pub struct GetProposalQuery {
    pub proposal_id: ProposalId,
}

/// Handler for retrieving a proposal.
pub struct GetProposalHandler {
    repository: Arc<dyn ProposalRepository>,
}

impl GetProposalHandler {
    pub fn new(repository: Arc<dyn ProposalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetProposalQuery) -> Result<Proposal, ProposalError> {
        self.repository
            .find_by_id(&query.proposal_id)
            .await?
            .ok_or_else(|| ProposalError::not_found(query.proposal_id))
    }
}
