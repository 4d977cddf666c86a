//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps, auth types, error types and the state
//! machine trait that form the vocabulary of the proposal domain.

mod auth;
mod errors;
mod ids;
mod state_machine;
mod timestamp;

pub use auth::{AuthError, AuthenticatedUser};
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{ProposalId, UserId};
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
