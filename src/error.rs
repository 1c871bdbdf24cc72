//! Transition errors.

use thiserror::Error;

/// Errors that can occur when driving a state machine.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// `go` was asked to move along a transition that was never registered
    /// and no invalid-transition handler swallowed the attempt.
    #[error("Error no transition function exists from state {from} to {to}")]
    InvalidTransition { from: String, to: String },
}

impl TransitionError {
    pub(crate) fn invalid(from: &str, to: &str) -> Self {
        TransitionError::InvalidTransition {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
