//! Import flow state machine.
//!
//! Models the paste-and-import interaction as a plain value. Every
//! transition is a pure function from the current flow and an event to the
//! next flow, so the interaction can be driven and tested without any UI.
//!
//! ```text
//! Idle ──Edited──▶ Editing ──ImportRequested──▶ Importing ──Succeeded──▶ Imported
//!                   ▲                              │                        │
//!                   │                            Failed                     │
//!                   │                              ▼                        │
//!                   ├───────Dismissed / Edited── Failed                     │
//!                   └───────────────────Edited──────────────────────────────┘
//! ```

use serde::Serialize;

use super::{import_document_with, ImportError, ImportPolicy};
use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::proposal::ProposalDocument;

/// The nodes of the import flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportPhase {
    Idle,
    Editing,
    Importing,
    Imported,
    Failed,
}

impl StateMachine for ImportPhase {
    fn valid_transitions(&self) -> Vec<Self> {
        use ImportPhase::*;
        match self {
            Idle => vec![Editing],
            Editing => vec![Editing, Importing],
            Importing => vec![Imported, Failed],
            Imported => vec![Editing],
            Failed => vec![Editing],
        }
    }
}

/// Something the user (or the importer) did.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportEvent {
    /// The raw-text buffer now holds this text.
    Edited(String),
    /// The user pressed import.
    ImportRequested,
    /// The importer produced a document.
    Succeeded(Box<ProposalDocument>),
    /// The importer rejected the buffer.
    Failed(ImportError),
    /// The user acknowledged the failure message.
    Dismissed,
}

/// Current state of one import interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportFlow {
    phase: ImportPhase,
    buffer: String,
    document: Option<ProposalDocument>,
    error: Option<ImportError>,
}

impl Default for ImportFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportFlow {
    /// A flow that has not seen any input yet.
    pub fn new() -> Self {
        Self {
            phase: ImportPhase::Idle,
            buffer: String::new(),
            document: None,
            error: None,
        }
    }

    pub fn phase(&self) -> ImportPhase {
        self.phase
    }

    /// Raw text waiting to be imported.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Last successfully imported document, kept until the next success.
    pub fn document(&self) -> Option<&ProposalDocument> {
        self.document.as_ref()
    }

    /// Error behind the `Failed` phase.
    pub fn error(&self) -> Option<&ImportError> {
        self.error.as_ref()
    }

    /// User-facing text for the current failure, if any.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ImportError::to_client_message)
    }

    /// Applies one event. Events that make no sense in the current phase
    /// are rejected and leave the caller's previous value usable.
    pub fn apply(self, event: ImportEvent) -> Result<Self, ValidationError> {
        match event {
            ImportEvent::Edited(text) => {
                let phase = self.phase.transition_to(ImportPhase::Editing)?;
                Ok(Self {
                    phase,
                    buffer: text,
                    error: None,
                    ..self
                })
            }
            ImportEvent::ImportRequested => {
                let phase = self.phase.transition_to(ImportPhase::Importing)?;
                Ok(Self { phase, ..self })
            }
            ImportEvent::Succeeded(document) => {
                let phase = self.phase.transition_to(ImportPhase::Imported)?;
                Ok(Self {
                    phase,
                    buffer: String::new(),
                    document: Some(*document),
                    error: None,
                })
            }
            ImportEvent::Failed(error) => {
                let phase = self.phase.transition_to(ImportPhase::Failed)?;
                Ok(Self {
                    phase,
                    error: Some(error),
                    ..self
                })
            }
            ImportEvent::Dismissed => {
                if self.phase != ImportPhase::Failed {
                    return Err(ValidationError::invalid_format(
                        "import_event",
                        format!("Nothing to dismiss in {:?}", self.phase),
                    ));
                }
                Ok(Self {
                    phase: ImportPhase::Editing,
                    error: None,
                    ..self
                })
            }
        }
    }

    /// Runs the importer on the buffer and applies the outcome.
    ///
    /// Only valid while `Importing`.
    pub fn resolve(
        self,
        defaults: &ProposalDocument,
        policy: ImportPolicy,
    ) -> Result<Self, ValidationError> {
        if self.phase != ImportPhase::Importing {
            return Err(ValidationError::invalid_format(
                "import_event",
                format!("Cannot run an import from {:?}", self.phase),
            ));
        }

        let outcome = match import_document_with(&self.buffer, defaults, policy) {
            Ok(document) => ImportEvent::Succeeded(Box::new(document)),
            Err(error) => {
                tracing::debug!(%error, "import rejected");
                ImportEvent::Failed(error)
            }
        };
        self.apply(outcome)
    }
}
