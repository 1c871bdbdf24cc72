//! Permitted transitions between states.

use super::state::State;
use serde::{Deserialize, Serialize};

/// A directed, permitted move from one state to another.
///
/// `(A, B)` being permitted says nothing about `(B, A)`.
///
/// # Example
///
/// ```rust
/// use typestate::core::TransitionFunction;
///
/// let open = TransitionFunction::new("closed", "opened");
/// assert!(open.connects(&"closed", &"opened"));
/// assert!(!open.connects(&"opened", &"closed"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionFunction<S> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
}

impl<S: State> TransitionFunction<S> {
    pub fn new(from: S, to: S) -> Self {
        Self { from, to }
    }

    /// Whether this is the move `from -> to`.
    pub fn connects(&self, from: &S, to: &S) -> bool {
        self.from == *from && self.to == *to
    }

    /// Whether the transition starts and ends in the same state.
    pub fn is_self_transition(&self) -> bool {
        self.from == self.to
    }
}
