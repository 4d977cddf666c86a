//! ListProposalsHandler - Query handler for the proposal list page.

use std::sync::Arc;

use crate::domain::proposal::Proposal;
use crate::ports::{ProposalOrder, ProposalRepository};

use super::ProposalError;

/// Query for all proposals.
#[derive(Debug, Clone, Default)]
pub struct ListProposalsQuery {
    pub order: ProposalOrder,
}

/// Handler for listing proposals.
pub struct ListProposalsHandler {
    repository: Arc<dyn ProposalRepository>,
}

impl ListProposalsHandler {
    pub fn new(repository: Arc<dyn ProposalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListProposalsQuery) -> Result<Vec<Proposal>, ProposalError> {
        let proposals = self.repository.find_all(query.order).await?;
        tracing::debug!(count = proposals.len(), "Listed proposals");
        Ok(proposals)
    }
}
