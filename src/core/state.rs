//! Core State trait for state machine states.
//!
//! The machine is generic over its state type. States are opaque to it:
//! they only need to be comparable by value, hashable so callbacks can be
//! keyed by them, and nameable for diagnostics.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the machine keeps its own copies of the start and current state
/// - `Eq` + `Hash`: transitions and callbacks are keyed by state value
/// - `Debug`: states must be debuggable for diagnostics
///
/// Two distinct logical states must never compare equal, or the transition
/// table will conflate them. They may, however, share a [`name`](State::name):
/// the name is only used in error messages and logs.
///
/// # Example
///
/// ```rust
/// use typestate::core::State;
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// enum TaskState {
///     Pending,
///     Running,
///     Complete,
/// }
///
/// impl State for TaskState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Pending => "Pending",
///             Self::Running => "Running",
///             Self::Complete => "Complete",
///         }
///     }
/// }
///
/// assert_eq!(TaskState::Running.name(), "Running");
/// ```
pub trait State: Clone + Eq + Hash + Debug {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
