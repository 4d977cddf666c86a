//! Plan comparison matrix.
//!
//! One row per reconciled feature label, one column per plan, each cell
//! telling whether that plan offers the feature.

use serde::Serialize;

use super::reconcile_features;
use crate::domain::proposal::PricingPlan;

/// Plan comparison table: one column per plan, one row per feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureMatrix {
    /// Plan titles, in plan order.
    pub columns: Vec<String>,
    /// Reconciled features, in display order.
    pub rows: Vec<FeatureRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRow {
    pub label: String,
    /// Whether each plan (by column index) offers this feature.
    pub presence: Vec<bool>,
}

impl FeatureRow {
    /// Number of plans offering this feature.
    pub fn plan_count(&self) -> usize {
        self.presence.iter().filter(|p| **p).count()
    }

    /// True if every plan offers this feature.
    pub fn in_every_plan(&self) -> bool {
        !self.presence.is_empty() && self.presence.iter().all(|p| *p)
    }
}

impl FeatureMatrix {
    /// Builds the table for a set of plans.
    pub fn build(plans: &[PricingPlan]) -> Self {
        let columns = plans.iter().map(|p| p.title.clone()).collect();
        let rows = reconcile_features(plans)
            .into_iter()
            .map(|label| {
                let presence = plans.iter().map(|p| p.offers(&label)).collect();
                FeatureRow { label, presence }
            })
            .collect();

        Self { columns, rows }
    }

    /// Whether the plan in `column` offers the feature in `row`.
    ///
    /// Out-of-range coordinates read as absent.
    pub fn is_present(&self, row: usize, column: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.presence.get(column))
            .copied()
            .unwrap_or(false)
    }

    /// Labels offered by every plan.
    pub fn shared_features(&self) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .filter(|r| r.in_every_plan())
            .map(|r| r.label.as_str())
    }

    /// True when no plan offers any feature.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(title: &str, features: &[&str]) -> PricingPlan {
        PricingPlan {
            title: title.to_string(),
            features: features.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn sample() -> FeatureMatrix {
        FeatureMatrix::build(&[
            plan("Starter", &["Email", " Chat "]),
            plan("Pro", &["Email", "Chat", "API"]),
            plan("Enterprise", &["Email", "API", "SSO"]),
        ])
    }

    #[test]
    fn columns_follow_plan_order() {
        assert_eq!(sample().columns, vec!["Starter", "Pro", "Enterprise"]);
    }

    #[test]
    fn rows_follow_reconciled_order() {
        let binding = sample();
        let labels: Vec<&str> = binding.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Email", "API", "Chat", "SSO"]);
    }

    #[test]
    fn presence_uses_trimmed_membership() {
        let m = sample();
        // Row "Chat": Starter has " Chat " which trims to "Chat".
        assert_eq!(m.rows[2].presence, vec![true, true, false]);
        assert!(m.is_present(2, 0));
        assert!(!m.is_present(2, 2));
    }

    #[test]
    fn out_of_range_cells_read_absent() {
        let m = sample();
        assert!(!m.is_present(99, 0));
        assert!(!m.is_present(0, 99));
    }

    #[test]
    fn shared_features_are_in_every_column() {
        let m = sample();
        let shared: Vec<&str> = m.shared_features().collect();
        assert_eq!(shared, vec!["Email"]);
        assert_eq!(m.rows[0].plan_count(), 3);
    }

    #[test]
    fn empty_plans_give_empty_matrix() {
        let m = FeatureMatrix::build(&[]);
        assert!(m.is_empty());
        assert!(m.columns.is_empty());
    }

    #[test]
    fn placeholder_plan_has_no_rows() {
        let m = FeatureMatrix::build(&[PricingPlan::canonical_default()]);
        assert!(m.is_empty());
        assert_eq!(m.columns, vec!["Essentials"]);
    }
}
