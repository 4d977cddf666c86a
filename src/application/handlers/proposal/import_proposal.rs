//! ImportProposalHandler - turns pasted JSON into a populated document.
//!
//! Nothing is written; the caller reviews the document and saves it through
//! `CreateProposalHandler`.

use crate::domain::import::{ImportEvent, ImportFlow, ImportPhase, ImportPolicy};
use crate::domain::proposal::ProposalDocument;

use super::ProposalError;

/// Command carrying the raw import text.
#[derive(Debug, Clone)]
pub struct ImportProposalCommand {
    pub raw: String,
    /// Document to fill gaps from. `None` uses the blank form.
    pub defaults: Option<ProposalDocument>,
}

/// Handler for importing proposals from JSON text.
#[derive(Debug, Clone)]
pub struct ImportProposalHandler {
    policy: ImportPolicy,
    max_payload_bytes: usize,
}

impl ImportProposalHandler {
    pub fn new(policy: ImportPolicy, max_payload_bytes: usize) -> Self {
        Self {
            policy,
            max_payload_bytes,
        }
    }

    pub fn policy(&self) -> ImportPolicy {
        self.policy
    }

    pub fn handle(&self, cmd: ImportProposalCommand) -> Result<ProposalDocument, ProposalError> {
        if cmd.raw.len() > self.max_payload_bytes {
            return Err(ProposalError::PayloadTooLarge {
                size: cmd.raw.len(),
                limit: self.max_payload_bytes,
            });
        }

        let defaults = cmd.defaults.unwrap_or_default();
        let flow = ImportFlow::new()
            .apply(ImportEvent::Edited(cmd.raw))?
            .apply(ImportEvent::ImportRequested)?
            .resolve(&defaults, self.policy)?;

        match (flow.phase(), flow.document(), flow.error()) {
            (ImportPhase::Imported, Some(document), _) => Ok(document.clone()),
            (_, _, Some(error)) => Err(error.clone().into()),
            (phase, _, _) => Err(ProposalError::infrastructure(format!(
                "Import ended in unexpected phase {:?}",
                phase
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::import::ImportError;
    use crate::domain::proposal::{PricingPlan, SuccessCriteriaGroup};

    fn handler() -> ImportProposalHandler {
        ImportProposalHandler::new(ImportPolicy::Permissive, 64 * 1024)
    }

    fn command(raw: &str) -> ImportProposalCommand {
        ImportProposalCommand {
            raw: raw.to_string(),
            defaults: None,
        }
    }

    #[test]
    fn fills_missing_fields_from_blank_form() {
        let doc = handler().handle(command(r#"{"title":"X"}"#)).unwrap();
        assert_eq!(
            doc,
            ProposalDocument {
                title: "X".to_string(),
                ..Default::default()
            }
        );
    }

    #[test]
    fn fills_missing_fields_from_supplied_defaults() {
        let defaults = ProposalDocument::sample_template();
        let doc = handler()
            .handle(ImportProposalCommand {
                raw: r#"{"client_name":"Globex"}"#.to_string(),
                defaults: Some(defaults.clone()),
            })
            .unwrap();

        assert_eq!(doc.client_name, "Globex");
        assert_eq!(doc.title, defaults.title);
        assert_eq!(doc.pricing_plans, vec![PricingPlan::canonical_default()]);
        assert_eq!(
            doc.success_criteria,
            vec![SuccessCriteriaGroup::canonical_default()]
        );
    }

    #[test]
    fn bad_json_is_parse_error() {
        let result = handler().handle(command("not json"));
        assert!(matches!(
            result,
            Err(ProposalError::Import(ImportError::Parse { .. }))
        ));
    }

    #[test]
    fn blank_text_is_a_parse_error() {
        let result = handler().handle(command("   "));
        assert!(matches!(
            result,
            Err(ProposalError::Import(ImportError::Parse { .. }))
        ));
    }

    #[test]
    fn oversized_text_is_rejected() {
        let handler = ImportProposalHandler::new(ImportPolicy::Permissive, 8);
        let result = handler.handle(command(r#"{"title":"too long"}"#));
        assert!(matches!(
            result,
            Err(ProposalError::PayloadTooLarge { limit: 8, .. })
        ));
    }

    #[test]
    fn strict_policy_rejects_bad_elements() {
        let handler = ImportProposalHandler::new(ImportPolicy::Strict, 64 * 1024);
        let result = handler.handle(command(r#"{"pricing_plans":[42]}"#));
        assert!(matches!(
            result,
            Err(ProposalError::Import(ImportError::InvalidElement { .. }))
        ));
    }
}
