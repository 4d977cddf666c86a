//! Import module - building proposals from pasted JSON.
//!
//! The importer turns untrusted text into a fully populated
//! `ProposalDocument`; the flow tracks the paste, import, fail and retry
//! interaction around it.

mod errors;
mod flow;
mod importer;

pub use errors::{ImportError, ImportPolicy};
pub use flow::{ImportEvent, ImportFlow, ImportPhase};
pub use importer::{import_document, import_document_with};
