//! Property tests for feature reconciliation and JSON import.

use std::collections::HashSet;

use proptest::prelude::*;

use proposal_desk::domain::comparison::{reconcile_features, FeatureMatrix};
use proposal_desk::domain::import::import_document;
use proposal_desk::domain::proposal::{PricingPlan, ProposalDocument};

fn label() -> impl Strategy<Value = String> {
    // Small alphabet so plans share labels; padding exercises trimming
    prop::sample::select(vec!["SSO", "API", " API ", "Reports", "Audit log", "", "  ", "Chat"])
        .prop_map(str::to_string)
}

fn plan() -> impl Strategy<Value = PricingPlan> {
    prop::collection::vec(label(), 0..6).prop_map(|features| PricingPlan {
        title: "Plan".to_string(),
        features,
        ..Default::default()
    })
}

fn plans() -> impl Strategy<Value = Vec<PricingPlan>> {
    prop::collection::vec(plan(), 0..5)
}

proptest! {
    #[test]
    fn output_has_no_duplicates(plans in plans()) {
        let labels = reconcile_features(&plans);
        let unique: HashSet<&String> = labels.iter().collect();
        prop_assert_eq!(unique.len(), labels.len());
    }

    #[test]
    fn output_is_trimmed_and_non_blank(plans in plans()) {
        for label in reconcile_features(&plans) {
            prop_assert!(!label.is_empty());
            prop_assert_eq!(label.trim(), label.as_str());
        }
    }

    #[test]
    fn every_offered_label_appears(plans in plans()) {
        let labels: HashSet<String> = reconcile_features(&plans).into_iter().collect();
        for plan in &plans {
            for feature in plan.normalized_features() {
                prop_assert!(labels.contains(feature));
            }
        }
    }

    #[test]
    fn shared_labels_come_first(plans in plans()) {
        let matrix = FeatureMatrix::build(&plans);
        let first_partial = matrix.rows.iter().position(|row| !row.in_every_plan());
        if let Some(boundary) = first_partial {
            prop_assert!(matrix.rows[boundary..].iter().all(|row| !row.in_every_plan()));
        }
    }

    #[test]
    fn plan_order_does_not_matter(mut plans in plans()) {
        let forward = reconcile_features(&plans);
        plans.reverse();
        prop_assert_eq!(reconcile_features(&plans), forward);
    }

    #[test]
    fn single_title_import_changes_only_title(title in "[a-zA-Z0-9 ]{0,24}") {
        let defaults = ProposalDocument::default();
        let raw = serde_json::json!({ "title": title }).to_string();

        let imported = import_document(&raw, &defaults).unwrap();

        prop_assert_eq!(&imported.title, &title);
        prop_assert_eq!(
            ProposalDocument { title: defaults.title.clone(), ..imported },
            defaults
        );
    }
}

#[test]
fn worked_example_orders_shared_label_first() {
    let plans = vec![
        PricingPlan {
            features: vec!["A".to_string(), "B".to_string()],
            ..Default::default()
        },
        PricingPlan {
            features: vec!["B".to_string(), "C".to_string()],
            ..Default::default()
        },
    ];
    assert_eq!(reconcile_features(&plans), vec!["B", "A", "C"]);
}
