//! In-Memory Proposal Repository
//!
//! Keeps proposals in process memory. Used in development when no database
//! is configured, and in tests.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ProposalId};
use crate::domain::proposal::{NewProposal, Proposal};
use crate::ports::{ProposalOrder, ProposalRepository};

/// In-memory proposal store
#[derive(Debug, Clone, Default)]
pub struct InMemoryProposalRepository {
    proposals: Arc<RwLock<Vec<Proposal>>>,
}

impl InMemoryProposalRepository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored proposals
    pub async fn len(&self) -> usize {
        self.proposals.read().await.len()
    }

    /// True when nothing has been stored
    pub async fn is_empty(&self) -> bool {
        self.proposals.read().await.is_empty()
    }
}

#[async_trait]
impl ProposalRepository for InMemoryProposalRepository {
    async fn insert(&self, proposal: &NewProposal) -> Result<Proposal, DomainError> {
        let stored = proposal.clone().into_proposal(ProposalId::new());
        self.proposals.write().await.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: &ProposalId) -> Result<Option<Proposal>, DomainError> {
        let proposals = self.proposals.read().await;
        Ok(proposals.iter().find(|p| &p.id == id).cloned())
    }

    async fn find_all(&self, order: ProposalOrder) -> Result<Vec<Proposal>, DomainError> {
        let mut proposals = self.proposals.read().await.clone();
        match order {
            ProposalOrder::CreatedAtDesc => proposals.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            ProposalOrder::CreatedAtAsc => proposals.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            ProposalOrder::UpdatedAtDesc => proposals.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        }
        Ok(proposals)
    }
}
