//! Feature reconciliation across pricing plans.
//!
//! Builds the row labels of the plan comparison table: every distinct
//! feature offered by any plan, once, in a fixed order.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::domain::proposal::PricingPlan;

/// Returns the union of all plans' feature labels in display order.
///
/// Labels are trimmed and blank labels dropped. Ordering:
/// 1. labels offered by every plan, alphabetically;
/// 2. the rest by the number of plans offering them, descending;
/// 3. ties alphabetically.
///
/// A label listed twice in one plan counts once for that plan.
pub fn reconcile_features(plans: &[PricingPlan]) -> Vec<String> {
    let total_plans = plans.len();
    let mut plan_counts: HashMap<&str, usize> = HashMap::new();

    for plan in plans {
        let distinct: HashSet<&str> = plan.normalized_features().collect();
        for label in distinct {
            *plan_counts.entry(label).or_insert(0) += 1;
        }
    }

    let mut labels: Vec<(&str, usize)> = plan_counts.into_iter().collect();
    labels.sort_by(|(a, count_a), (b, count_b)| {
        compare_labels(a, *count_a, b, *count_b, total_plans)
    });

    labels.into_iter().map(|(label, _)| label.to_string()).collect()
}

fn compare_labels(a: &str, count_a: usize, b: &str, count_b: usize, total_plans: usize) -> Ordering {
    match (count_a == total_plans, count_b == total_plans) {
        (true, true) => a.cmp(b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => count_b.cmp(&count_a).then_with(|| a.cmp(b)),
    }
}

#[cfg(test)]
#[path = "reconciler_test.rs"]
mod reconciler_test;
