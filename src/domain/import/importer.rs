//! JSON import of proposal documents.
//!
//! Field-wise defaulting, not deep merge: each top-level field comes from the
//! input when the input supplies it, otherwise from the defaults. Arrays are
//! taken whole; their elements are converted one by one into typed records.
//! An array the input does not supply becomes the one-element canonical
//! section, whatever the defaults hold.

use serde_json::{Map, Value};

use super::{ImportError, ImportPolicy};
use crate::domain::proposal::{PricingPlan, ProposalDocument, SuccessCriteriaGroup, SCALAR_FIELDS};

/// Imports a document permissively. Fails only on malformed JSON.
pub fn import_document(
    raw: &str,
    defaults: &ProposalDocument,
) -> Result<ProposalDocument, ImportError> {
    import_document_with(raw, defaults, ImportPolicy::Permissive)
}

/// Imports a document under the given policy.
///
/// `defaults` is only read. `status` always comes from `defaults`.
pub fn import_document_with(
    raw: &str,
    defaults: &ProposalDocument,
    policy: ImportPolicy,
) -> Result<ProposalDocument, ImportError> {
    let parsed: Value = serde_json::from_str(raw)?;

    let empty = Map::new();
    let fields = match &parsed {
        Value::Object(map) => map,
        other => {
            if policy == ImportPolicy::Strict {
                return Err(ImportError::NotAnObject {
                    found: json_type(other).to_string(),
                });
            }
            tracing::debug!(found = json_type(other), "import payload is not an object");
            &empty
        }
    };

    let mut document = defaults.clone();

    for name in SCALAR_FIELDS {
        let Some(value) = fields.get(name) else {
            continue;
        };
        match as_text(value) {
            Ok(Some(text)) => {
                if let Some(slot) = document.scalar_field_mut(name) {
                    *slot = text;
                }
            }
            Ok(None) => {}
            Err(found) => {
                if policy == ImportPolicy::Strict {
                    return Err(ImportError::InvalidField {
                        field: name.to_string(),
                        expected: "text".to_string(),
                        found: found.to_string(),
                    });
                }
                tracing::debug!(field = name, found, "keeping default for non-text field");
            }
        }
    }

    document.pricing_plans = match section_items(fields, "pricing_plans", policy)? {
        Some(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| read_plan(index, item, policy))
            .collect::<Result<Vec<_>, ImportError>>()?,
        None => vec![PricingPlan::canonical_default()],
    };

    document.success_criteria = match section_items(fields, "success_criteria", policy)? {
        Some(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| read_criteria_group(index, item, policy))
            .collect::<Result<Vec<_>, ImportError>>()?,
        None => vec![SuccessCriteriaGroup::canonical_default()],
    };

    Ok(document)
}

/// The array under `key`, or `None` when the canonical section should be used.
fn section_items<'a>(
    fields: &'a Map<String, Value>,
    key: &str,
    policy: ImportPolicy,
) -> Result<Option<&'a Vec<Value>>, ImportError> {
    match fields.get(key) {
        Some(Value::Array(items)) => Ok(Some(items)),
        None | Some(Value::Null) => Ok(None),
        Some(other) => {
            if policy == ImportPolicy::Strict {
                return Err(ImportError::InvalidField {
                    field: key.to_string(),
                    expected: "a list".to_string(),
                    found: json_type(other).to_string(),
                });
            }
            tracing::debug!(field = key, found = json_type(other), "keeping default section");
            Ok(None)
        }
    }
}

fn read_plan(index: usize, item: &Value, policy: ImportPolicy) -> Result<PricingPlan, ImportError> {
    let Some(reader) = ElementReader::open("pricing_plans", index, item, policy)? else {
        return Ok(PricingPlan::default());
    };

    Ok(PricingPlan {
        title: reader.text("title")?,
        price: reader.text("price")?,
        description: reader.text("description")?,
        deliverables: reader.list("deliverables")?,
        features: reader.list("features")?,
    })
}

fn read_criteria_group(
    index: usize,
    item: &Value,
    policy: ImportPolicy,
) -> Result<SuccessCriteriaGroup, ImportError> {
    let Some(reader) = ElementReader::open("success_criteria", index, item, policy)? else {
        return Ok(SuccessCriteriaGroup::default());
    };

    Ok(SuccessCriteriaGroup {
        title: reader.text("title")?,
        criteria: reader.list("criteria")?,
    })
}

/// Reads typed fields out of one array element, applying the policy to
/// anything that does not fit.
struct ElementReader<'a> {
    section: &'static str,
    index: usize,
    fields: &'a Map<String, Value>,
    policy: ImportPolicy,
}

impl<'a> ElementReader<'a> {
    /// `Ok(None)` means the element is not an object and should become blank.
    fn open(
        section: &'static str,
        index: usize,
        item: &'a Value,
        policy: ImportPolicy,
    ) -> Result<Option<Self>, ImportError> {
        match item {
            Value::Object(fields) => Ok(Some(Self {
                section,
                index,
                fields,
                policy,
            })),
            other => {
                let reason = format!("expected an object, got {}", json_type(other));
                if policy == ImportPolicy::Strict {
                    return Err(ImportError::InvalidElement {
                        section: section.to_string(),
                        index,
                        reason,
                    });
                }
                tracing::debug!(section, index, %reason, "replacing entry with a blank record");
                Ok(None)
            }
        }
    }

    fn text(&self, key: &str) -> Result<String, ImportError> {
        match self.fields.get(key).map(as_text) {
            None => Ok(String::new()),
            Some(Ok(text)) => Ok(text.unwrap_or_default()),
            Some(Err(found)) => {
                self.reject(key, format!("expected text, got {}", found))?;
                Ok(String::new())
            }
        }
    }

    fn list(&self, key: &str) -> Result<Vec<String>, ImportError> {
        match self.fields.get(key) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| match as_text(item) {
                    Ok(text) => Ok(text.unwrap_or_default()),
                    Err(found) => {
                        self.reject(key, format!("expected a list of text, found {} item", found))?;
                        Ok(String::new())
                    }
                })
                .collect(),
            Some(other) => {
                self.reject(key, format!("expected a list, got {}", json_type(other)))?;
                Ok(Vec::new())
            }
        }
    }

    fn reject(&self, key: &str, reason: String) -> Result<(), ImportError> {
        if self.policy == ImportPolicy::Strict {
            return Err(ImportError::InvalidElement {
                section: self.section.to_string(),
                index: self.index,
                reason: format!("field '{}' {}", key, reason),
            });
        }
        tracing::debug!(
            section = self.section,
            index = self.index,
            field = key,
            %reason,
            "coercing entry field"
        );
        Ok(())
    }
}

/// Text form of a JSON scalar. `Ok(None)` for null, `Err` with the JSON
/// type name for containers.
fn as_text(value: &Value) -> Result<Option<String>, &'static str> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => Err(json_type(value)),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "importer_test.rs"]
mod importer_test;
