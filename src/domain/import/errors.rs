//! Import errors.

use serde::Deserialize;
use thiserror::Error;

/// How strictly array elements and field types are checked on import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportPolicy {
    /// Accept any well-formed JSON; coerce what does not fit.
    #[default]
    Permissive,
    /// Reject elements and fields whose JSON type does not fit.
    Strict,
}

/// Errors raised while importing a proposal from JSON text.
///
/// Only `Parse` can occur under [`ImportPolicy::Permissive`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("Invalid JSON: {message}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
    },

    #[error("Expected a JSON object at the top level, got {found}")]
    NotAnObject { found: String },

    #[error("Field '{field}' must be {expected}, got {found}")]
    InvalidField {
        field: String,
        expected: String,
        found: String,
    },

    #[error("Invalid entry {section}[{index}]: {reason}")]
    InvalidElement {
        section: String,
        index: usize,
        reason: String,
    },
}

impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::Parse {
            message: err.to_string(),
            line: err.line(),
            column: err.column(),
        }
    }
}

impl ImportError {
    /// True for syntax errors in the input text.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ImportError::Parse { .. })
    }

    /// Message suitable for showing next to the import text box.
    pub fn to_client_message(&self) -> String {
        match self {
            ImportError::Parse { line, column, .. } => format!(
                "Invalid JSON format (line {}, column {}). Please check your input.",
                line, column
            ),
            ImportError::NotAnObject { .. } => {
                "The imported JSON must be an object with proposal fields.".to_string()
            }
            ImportError::InvalidField { field, expected, .. } => {
                format!("Field '{}' must be {}.", field, expected)
            }
            ImportError::InvalidElement {
                section, index, ..
            } => format!("Entry {} of '{}' is not valid.", index + 1, section),
        }
    }
}
