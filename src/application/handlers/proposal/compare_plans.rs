//! ComparePlansHandler - Query handler for a proposal's feature matrix.

use std::sync::Arc;

use crate::domain::comparison::FeatureMatrix;
use crate::domain::foundation::ProposalId;
use crate::ports::ProposalRepository;

use super::ProposalError;

/// Query for the plan comparison of one proposal.
#[derive(Debug, Clone)]
pub struct ComparePlansQuery {
    pub proposal_id: ProposalId,
}

/// Feature comparison for a stored proposal.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparePlansResult {
    pub proposal_id: ProposalId,
    pub title: String,
    pub matrix: FeatureMatrix,
}

/// Handler for comparing a proposal's pricing plans.
pub struct ComparePlansHandler {
    repository: Arc<dyn ProposalRepository>,
}

impl ComparePlansHandler {
    pub fn new(repository: Arc<dyn ProposalRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ComparePlansQuery) -> Result<ComparePlansResult, ProposalError> {
        let proposal = self
            .repository
            .find_by_id(&query.proposal_id)
            .await?
            .ok_or_else(|| ProposalError::not_found(query.proposal_id))?;

        let matrix = FeatureMatrix::build(&proposal.document.pricing_plans);

        Ok(ComparePlansResult {
            proposal_id: proposal.id,
            title: proposal.document.title,
            matrix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryProposalRepository;
    use crate::domain::foundation::Timestamp;
    use crate::domain::proposal::{NewProposal, PricingPlan, ProposalDocument};

    fn plan(title: &str, features: &[&str]) -> PricingPlan {
        PricingPlan {
            title: title.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn builds_matrix_from_stored_plans() {
        let repo = Arc::new(InMemoryProposalRepository::new());
        let doc = ProposalDocument {
            title: "Chatbot".to_string(),
            pricing_plans: vec![plan("Basic", &["A", "B"]), plan("Pro", &["B", "C"])],
            ..Default::default()
        };
        let stored = repo
            .insert(&NewProposal::draft(doc, Timestamp::now()))
            .await
            .unwrap();

        let result = ComparePlansHandler::new(repo)
            .handle(ComparePlansQuery {
                proposal_id: stored.id,
            })
            .await
            .unwrap();

        assert_eq!(result.title, "Chatbot");
        assert_eq!(result.matrix.columns, vec!["Basic", "Pro"]);
        let labels: Vec<&str> = result.matrix.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["B", "A", "C"]);
    }

    #[tokio::test]
    async fn unknown_proposal_is_not_found() {
        let handler = ComparePlansHandler::new(Arc::new(InMemoryProposalRepository::new()));
        let id = ProposalId::new();

        let result = handler.handle(ComparePlansQuery { proposal_id: id }).await;

        assert_eq!(result, Err(ProposalError::NotFound(id)));
    }
}
