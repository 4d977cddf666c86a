//! Request and response bodies for proposal endpoints.

use serde::{Deserialize, Serialize};

use crate::application::ComparePlansResult;
use crate::domain::proposal::{Proposal, ProposalDocument};
use crate::ports::ProposalOrder;

// ════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════

/// Body of `POST /api/proposals`. Omitted fields take the blank-form values.
pub type CreateProposalRequest = ProposalDocument;

/// Body of `POST /api/proposals/import`.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportProposalRequest {
    /// Raw JSON text pasted by the user.
    pub text: String,
    /// Current form contents to fill gaps from.
    #[serde(default)]
    pub defaults: Option<ProposalDocument>,
}

/// Query string of `GET /api/proposals`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProposalsParams {
    #[serde(default)]
    pub order: ProposalOrder,
}

// ════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct ProposalResponse {
    pub id: String,
    #[serde(flatten)]
    pub document: ProposalDocument,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Proposal> for ProposalResponse {
    fn from(proposal: Proposal) -> Self {
        Self {
            id: proposal.id.to_string(),
            document: proposal.document,
            created_at: proposal.created_at.to_rfc3339(),
            updated_at: proposal.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProposalListResponse {
    pub items: Vec<ProposalResponse>,
    pub total: usize,
}

impl From<Vec<Proposal>> for ProposalListResponse {
    fn from(proposals: Vec<Proposal>) -> Self {
        let items: Vec<ProposalResponse> = proposals.into_iter().map(Into::into).collect();
        Self {
            total: items.len(),
            items,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ImportProposalResponse {
    pub document: ProposalDocument,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonRowResponse {
    pub label: String,
    pub presence: Vec<bool>,
    pub in_every_plan: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ComparisonResponse {
    pub proposal_id: String,
    pub title: String,
    /// Plan titles, one per column.
    pub plans: Vec<String>,
    pub features: Vec<ComparisonRowResponse>,
}

impl From<ComparePlansResult> for ComparisonResponse {
    fn from(result: ComparePlansResult) -> Self {
        let features = result
            .matrix
            .rows
            .into_iter()
            .map(|row| ComparisonRowResponse {
                in_every_plan: row.in_every_plan(),
                label: row.label,
                presence: row.presence,
            })
            .collect();

        Self {
            proposal_id: result.proposal_id.to_string(),
            title: result.title,
            plans: result.matrix.columns,
            features,
        }
    }
}
