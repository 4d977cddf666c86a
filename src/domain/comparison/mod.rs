//! Comparison module - pricing plan feature tables.

mod matrix;
mod reconciler;

pub use matrix::{FeatureMatrix, FeatureRow};
pub use reconciler::reconcile_features;
