//! Pricing plans and success criteria groups, the repeated sections of a proposal.

use serde::{Deserialize, Serialize};

/// One pricing tier offered in a proposal.
///
/// `Default` is the blank record (every field empty). The placeholder shown
/// in a fresh form is [`PricingPlan::canonical_default`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PricingPlan {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub description: String,
    /// What the client receives. Order kept, duplicates allowed.
    #[serde(default)]
    pub deliverables: Vec<String>,
    /// Raw feature labels as entered. May contain blanks and padding.
    #[serde(default)]
    pub features: Vec<String>,
}

impl PricingPlan {
    /// The "Essentials" placeholder used when a document has no plans.
    pub fn canonical_default() -> Self {
        Self {
            title: "Essentials".to_string(),
            price: String::new(),
            description: String::new(),
            deliverables: vec![String::new()],
            features: vec![String::new()],
        }
    }

    /// Feature labels after trimming, with blank entries dropped.
    pub fn normalized_features(&self) -> impl Iterator<Item = &str> {
        self.features
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
    }

    /// True if `label` (trimmed) is one of this plan's trimmed features.
    pub fn offers(&self, label: &str) -> bool {
        let label = label.trim();
        !label.is_empty() && self.normalized_features().any(|f| f == label)
    }
}

/// A titled group of measurable success criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SuccessCriteriaGroup {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub criteria: Vec<String>,
}

impl SuccessCriteriaGroup {
    /// The "Performance Metrics" placeholder used when a document has no groups.
    pub fn canonical_default() -> Self {
        Self {
            title: "Performance Metrics".to_string(),
            criteria: vec![String::new()],
        }
    }
}
