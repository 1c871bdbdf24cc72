//! Fluent declaration of permitted transitions.

use crate::core::State;
use crate::machine::StateMachine;

/// Accumulates source states until destinations are given, then registers
/// the whole cross-product on the machine it was created from.
///
/// Created by [`StateMachine::from`] or [`StateMachine::from_any`].
/// Finishing with [`to`](Self::to) or [`to_any`](Self::to_any) consumes the
/// builder and hands the machine back, so declarations can be chained.
///
/// # Example
///
/// ```rust
/// use typestate::StateMachine;
///
/// let mut fsm: StateMachine<&str> = StateMachine::new("opened");
/// fsm.from(["opened"]).to(["closed"])
///     .from(["closed"]).to(["opened", "moving"])
///     .from(["moving"]).to(["closed"]);
///
/// assert_eq!(fsm.transitions().len(), 4);
/// ```
#[must_use = "transitions are only registered once `to` or `to_any` is called"]
pub struct TransitionBuilder<'m, S: State, P = ()> {
    machine: &'m mut StateMachine<S, P>,
    from_states: Vec<S>,
}

impl<'m, S: State, P> TransitionBuilder<'m, S, P> {
    pub(crate) fn new(machine: &'m mut StateMachine<S, P>, from_states: Vec<S>) -> Self {
        Self {
            machine,
            from_states,
        }
    }

    /// Source states declared so far.
    pub fn from_states(&self) -> &[S] {
        &self.from_states
    }

    /// Set the destination state(s) and register every source/destination
    /// pair. Self pairs and already permitted pairs are skipped.
    pub fn to<I>(self, states: I) -> &'m mut StateMachine<S, P>
    where
        I: IntoIterator<Item = S>,
    {
        let Self {
            machine,
            from_states,
        } = self;
        let to_states: Vec<S> = states.into_iter().collect();
        machine.add_transitions(&from_states, &to_states);
        machine
    }

    /// Use every state of the domain as a destination.
    ///
    /// `states` is the full, ordered list of state values.
    pub fn to_any<I>(self, states: I) -> &'m mut StateMachine<S, P>
    where
        I: IntoIterator<Item = S>,
    {
        self.to(states)
    }
}
