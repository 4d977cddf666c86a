//! The proposal document and its stored record.

use serde::{Deserialize, Serialize};

use super::{PricingPlan, ProposalStatus, SuccessCriteriaGroup};
use crate::domain::foundation::{ProposalId, Timestamp, ValidationError};

/// Fields a proposal cannot be saved without.
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "client_name", "project_overview"];

/// Names of the free-text fields, in form order.
pub const SCALAR_FIELDS: [&str; 10] = [
    "title",
    "client_name",
    "client_email",
    "project_overview",
    "problems_faced",
    "our_solution",
    "objectives",
    "timeline",
    "budget_range",
    "technical_requirements",
];

/// A client proposal: free-text sections, pricing plans and success criteria.
///
/// `Default` is the canonical shape of a fresh form: empty text, one
/// "Essentials" plan, one "Performance Metrics" group, status draft.
/// Fields missing on deserialization are taken from that shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProposalDocument {
    pub title: String,
    pub client_name: String,
    pub client_email: String,
    pub project_overview: String,
    pub problems_faced: String,
    pub our_solution: String,
    pub objectives: String,
    pub timeline: String,
    pub budget_range: String,
    pub technical_requirements: String,
    pub pricing_plans: Vec<PricingPlan>,
    pub success_criteria: Vec<SuccessCriteriaGroup>,
    pub status: ProposalStatus,
}

impl Default for ProposalDocument {
    fn default() -> Self {
        Self {
            title: String::new(),
            client_name: String::new(),
            client_email: String::new(),
            project_overview: String::new(),
            problems_faced: String::new(),
            our_solution: String::new(),
            objectives: String::new(),
            timeline: String::new(),
            budget_range: String::new(),
            technical_requirements: String::new(),
            pricing_plans: vec![PricingPlan::canonical_default()],
            success_criteria: vec![SuccessCriteriaGroup::canonical_default()],
            status: ProposalStatus::Draft,
        }
    }
}

impl ProposalDocument {
    /// Returns a free-text field by its wire name.
    pub fn scalar_field(&self, name: &str) -> Option<&str> {
        let value = match name {
            "title" => &self.title,
            "client_name" => &self.client_name,
            "client_email" => &self.client_email,
            "project_overview" => &self.project_overview,
            "problems_faced" => &self.problems_faced,
            "our_solution" => &self.our_solution,
            "objectives" => &self.objectives,
            "timeline" => &self.timeline,
            "budget_range" => &self.budget_range,
            "technical_requirements" => &self.technical_requirements,
            _ => return None,
        };
        Some(value.as_str())
    }

    /// Mutable access to a free-text field by its wire name.
    pub fn scalar_field_mut(&mut self, name: &str) -> Option<&mut String> {
        let value = match name {
            "title" => &mut self.title,
            "client_name" => &mut self.client_name,
            "client_email" => &mut self.client_email,
            "project_overview" => &mut self.project_overview,
            "problems_faced" => &mut self.problems_faced,
            "our_solution" => &mut self.our_solution,
            "objectives" => &mut self.objectives,
            "timeline" => &mut self.timeline,
            "budget_range" => &mut self.budget_range,
            "technical_requirements" => &mut self.technical_requirements,
            _ => return None,
        };
        Some(value)
    }

    /// Checks that every required field holds non-blank text.
    pub fn ensure_required(&self) -> Result<(), ValidationError> {
        for field in REQUIRED_FIELDS {
            if self.scalar_field(field).map_or(true, |v| v.trim().is_empty()) {
                return Err(ValidationError::empty_field(field));
            }
        }
        Ok(())
    }
}

/// A proposal as persisted by the document store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proposal {
    pub id: ProposalId,
    #[serde(flatten)]
    pub document: ProposalDocument,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A proposal ready to be written. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProposal {
    pub document: ProposalDocument,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl NewProposal {
    /// Wraps a document as a new draft stamped at `now`.
    ///
    /// Whatever status the document carried is replaced with `Draft`.
    pub fn draft(mut document: ProposalDocument, now: Timestamp) -> Self {
        document.status = ProposalStatus::Draft;
        Self {
            document,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attaches a store-generated id.
    pub fn into_proposal(self, id: ProposalId) -> Proposal {
        Proposal {
            id,
            document: self.document,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
