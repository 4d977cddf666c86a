//! CreateProposalHandler - Command handler for saving a new proposal.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::proposal::{NewProposal, Proposal, ProposalDocument};
use crate::ports::ProposalRepository;

use super::ProposalError;

/// Command to save a proposal document.
#[derive(Debug, Clone)]
pub struct CreateProposalCommand {
    pub user_id: UserId,
    pub document: ProposalDocument,
}

/// Handler for creating proposals.
pub struct CreateProposalHandler {
    repository: Arc<dyn ProposalRepository>,
}

impl CreateProposalHandler {
    pub fn new(repository: Arc<dyn ProposalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CreateProposalCommand) -> Result<Proposal, ProposalError> {
        cmd.document.ensure_required()?;

        // New proposals always start as drafts
        let new_proposal = NewProposal::draft(cmd.document, Timestamp::now());
        let proposal = self.repository.insert(&new_proposal).await?;

        tracing::info!(
            proposal_id = %proposal.id,
            user_id = %cmd.user_id,
            plans = proposal.document.pricing_plans.len(),
            "Proposal created"
        );

        Ok(proposal)
    }
}
