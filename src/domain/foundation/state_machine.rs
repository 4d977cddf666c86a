//! State machine trait for phase enums.
//!
//! Gives phase enums (such as the import flow's `ImportPhase`) a single way to
//! declare their allowed edges and to perform checked transitions.

use super::ValidationError;

/// Trait for enums that represent the nodes of a state machine.
///
/// Implementors list their outgoing edges; `transition_to` and
/// `is_terminal` come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for ImportPhase {
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Idle => vec![Editing],
///             Editing => vec![Editing, Importing],
///             // ...
///         }
///     }
/// }
///
/// let next = ImportPhase::Editing.transition_to(ImportPhase::Importing)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if the edge self -> target exists.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
