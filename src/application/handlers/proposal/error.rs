//! Errors returned by the proposal handlers.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ProposalId, ValidationError};
use crate::domain::import::ImportError;

/// Proposal handler errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProposalError {
    #[error("Proposal not found: {0}")]
    NotFound(ProposalId),

    #[error("Import failed: {0}")]
    Import(#[from] ImportError),

    #[error("Import text is {size} bytes, the limit is {limit}")]
    PayloadTooLarge { size: usize, limit: usize },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Infrastructure(String),
}

impl ProposalError {
    pub fn not_found(id: ProposalId) -> Self {
        ProposalError::NotFound(id)
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        ProposalError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ProposalError::NotFound(_) => ErrorCode::ProposalNotFound,
            ProposalError::Import(ImportError::Parse { .. }) => ErrorCode::InvalidFormat,
            ProposalError::Import(_) => ErrorCode::ImportFailed,
            ProposalError::PayloadTooLarge { .. } => ErrorCode::ImportFailed,
            ProposalError::Validation(_) => ErrorCode::ValidationFailed,
            ProposalError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }

    /// Message safe to return to clients. Storage details stay in the logs.
    pub fn client_message(&self) -> String {
        match self {
            ProposalError::Import(err) => err.to_client_message(),
            ProposalError::Infrastructure(_) => "Failed to reach the proposal store".to_string(),
            other => other.to_string(),
        }
    }
}

impl From<DomainError> for ProposalError {
    fn from(err: DomainError) -> Self {
        ProposalError::Infrastructure(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_failures_map_to_invalid_format() {
        let err = ProposalError::from(ImportError::Parse {
            message: "expected value".to_string(),
            line: 1,
            column: 1,
        });
        assert_eq!(err.code(), ErrorCode::InvalidFormat);
        assert!(err.client_message().contains("line 1, column 1"));
    }

    #[test]
    fn domain_errors_become_infrastructure() {
        let err = ProposalError::from(DomainError::new(ErrorCode::DatabaseError, "pool closed"));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert!(!err.client_message().contains("pool closed"));
    }

    #[test]
    fn validation_errors_keep_field_name() {
        let err = ProposalError::from(ValidationError::empty_field("title"));
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(err.client_message().contains("title"));
    }
}
