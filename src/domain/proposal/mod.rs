//! Proposal module - the document clients receive.
//!
//! A proposal is a set of free-text sections, an ordered list of pricing
//! plans and an ordered list of success criteria groups. Stored proposals
//! wrap the document with an id and timestamps.

mod document;
mod pricing_plan;
mod status;
mod template;

pub use document::{NewProposal, Proposal, ProposalDocument, REQUIRED_FIELDS, SCALAR_FIELDS};
pub use pricing_plan::{PricingPlan, SuccessCriteriaGroup};
pub use status::ProposalStatus;
