//! Domain layer - pure proposal logic with no infrastructure dependencies.

pub mod comparison;
pub mod foundation;
pub mod import;
pub mod proposal;
