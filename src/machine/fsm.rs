//! State machine that validates and executes guarded transitions.

use crate::builder::TransitionBuilder;
use crate::core::{
    all_pass, EnterGuard, ExitGuard, InvalidTransitionHandler, Observer, State,
    TransitionFunction, TransitionHook,
};
use crate::error::TransitionError;
use crate::machine::config::MachineConfig;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Result of a `go` call that did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionOutcome<S> {
    /// The machine moved to a new state
    Transitioned { from: S, to: S },

    /// An exit or enter guard rejected the transition; nothing changed
    Vetoed,

    /// The transition was not permitted, but the invalid-transition handler
    /// swallowed the attempt; nothing changed
    Suppressed,
}

impl<S> TransitionOutcome<S> {
    /// Whether the current state changed.
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

/// A finite state machine over states `S`, optionally carrying a payload `P`
/// from `go_with` to the enter guards and observers of a transition.
///
/// # Example
///
/// ```rust
/// use typestate::{State, StateMachine, TransitionError};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Door {
///     Opened,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Opened => "Opened",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// let mut door: StateMachine<Door> = StateMachine::new(Door::Opened);
/// door.from([Door::Opened]).to([Door::Closed]);
///
/// assert!(door.can_go(&Door::Closed));
/// door.go(Door::Closed).unwrap();
/// assert!(door.is(&Door::Closed));
///
/// let err = door.go(Door::Opened).unwrap_err();
/// assert_eq!(
///     err,
///     TransitionError::InvalidTransition {
///         from: "Closed".into(),
///         to: "Opened".into(),
///     }
/// );
/// ```
pub struct StateMachine<S: State, P = ()> {
    current: S,
    start: S,
    config: MachineConfig,
    transitions: Vec<TransitionFunction<S>>,
    table: HashMap<S, HashSet<S>>,
    on_enter_observers: HashMap<S, Vec<Observer<S, P>>>,
    enter_guards: HashMap<S, Vec<EnterGuard<S, P>>>,
    exit_guards: HashMap<S, Vec<ExitGuard<S>>>,
    on_transition: Option<TransitionHook<S>>,
    invalid_transition_handler: Option<InvalidTransitionHandler<S>>,
}

impl<S: State, P> StateMachine<S, P> {
    /// Create a machine in `start` that forbids implicit self-transitions.
    pub fn new(start: S) -> Self {
        Self::with_config(start, MachineConfig::default())
    }

    /// Create a machine in `start` with explicit configuration.
    pub fn with_config(start: S, config: MachineConfig) -> Self {
        Self {
            current: start.clone(),
            start,
            config,
            transitions: Vec::new(),
            table: HashMap::new(),
            on_enter_observers: HashMap::new(),
            enter_guards: HashMap::new(),
            exit_guards: HashMap::new(),
            on_transition: None,
            invalid_transition_handler: None,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &S {
        &self.current
    }

    /// Get the state the machine was created in (pure)
    pub fn start_state(&self) -> &S {
        &self.start
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    pub fn allows_implicit_self_transition(&self) -> bool {
        self.config.allow_implicit_self_transition
    }

    /// Registered transitions, in the order they were added.
    pub fn transitions(&self) -> &[TransitionFunction<S>] {
        &self.transitions
    }

    /// Start declaring transitions out of `states`. Finish with
    /// [`TransitionBuilder::to`] or [`TransitionBuilder::to_any`].
    pub fn from<I>(&mut self, states: I) -> TransitionBuilder<'_, S, P>
    where
        I: IntoIterator<Item = S>,
    {
        TransitionBuilder::new(self, states.into_iter().collect())
    }

    /// Start declaring transitions out of every state of the domain.
    ///
    /// `states` is the full, ordered list of state values, such as the one
    /// produced by `variants()` on a [`state_enum!`](crate::state_enum) type.
    pub fn from_any<I>(&mut self, states: I) -> TransitionBuilder<'_, S, P>
    where
        I: IntoIterator<Item = S>,
    {
        self.from(states)
    }

    /// Register every pair of `from × to` as a permitted transition.
    ///
    /// Self pairs are skipped, as are pairs that are already permitted.
    /// Returns the number of pairs actually added.
    pub fn add_transitions(&mut self, from: &[S], to: &[S]) -> usize {
        let mut added = 0;
        for source in from {
            for target in to {
                if source == target || self.can_go_between(source, target) {
                    continue;
                }
                self.table
                    .entry(source.clone())
                    .or_default()
                    .insert(target.clone());
                self.transitions
                    .push(TransitionFunction::new(source.clone(), target.clone()));
                added += 1;
            }
        }

        tracing::debug!(
            added,
            total = self.transitions.len(),
            "registered transitions"
        );
        added
    }

    /// Whether a move `from -> to` is permitted, either by the table or by
    /// the implicit self-transition rule (pure)
    pub fn can_go_between(&self, from: &S, to: &S) -> bool {
        (self.config.allow_implicit_self_transition && from == to)
            || self
                .table
                .get(from)
                .is_some_and(|targets| targets.contains(to))
    }

    /// Whether the machine may move from its current state to `state` (pure)
    pub fn can_go(&self, state: &S) -> bool {
        self.can_go_between(&self.current, state)
    }

    /// Registered destinations reachable from the current state, in
    /// registration order. Does not include the implicit self-transition.
    pub fn next_states(&self) -> impl Iterator<Item = &S> + '_ {
        self.transitions
            .iter()
            .filter(move |transition| transition.from == self.current)
            .map(|transition| &transition.to)
    }

    /// Whether the machine is currently in `state` (pure)
    pub fn is(&self, state: &S) -> bool {
        self.current == *state
    }

    /// Move to `state` without a payload.
    ///
    /// Fails with [`TransitionError::InvalidTransition`] if the move is not
    /// permitted and no invalid-transition handler swallows it. A guard
    /// rejecting the move is not a failure.
    pub fn go(&mut self, state: S) -> Result<TransitionOutcome<S>, TransitionError> {
        self.attempt(state, None)
    }

    /// Move to `state`, handing `payload` to the enter guards and observers
    /// of this transition.
    pub fn go_with(
        &mut self,
        state: S,
        payload: P,
    ) -> Result<TransitionOutcome<S>, TransitionError> {
        self.attempt(state, Some(payload))
    }

    /// Put the machine back in its start state.
    ///
    /// This is not a transition: no legality check is made and no guard,
    /// observer or hook runs. Do not use it as a shortcut for `go`.
    pub fn reset(&mut self) {
        tracing::debug!(
            from = self.current.name(),
            to = self.start.name(),
            "reset to start state"
        );
        self.current = self.start.clone();
    }

    /// Fire `callback` after every transition into `state`. The callback
    /// receives the previous state and the payload, if any.
    pub fn on<F>(&mut self, state: S, callback: F) -> &mut Self
    where
        F: FnMut(&S, Option<&P>) + 'static,
    {
        self.on_enter_observers
            .entry(state)
            .or_default()
            .push(Box::new(callback));
        self
    }

    /// Consult `guard` before every transition into `state`; returning
    /// `false` blocks the transition. The guard receives the state being
    /// left and the payload, if any.
    pub fn on_enter<F>(&mut self, state: S, guard: F) -> &mut Self
    where
        F: FnMut(&S, Option<&P>) -> bool + 'static,
    {
        self.enter_guards
            .entry(state)
            .or_default()
            .push(Box::new(guard));
        self
    }

    /// Consult `guard` before every transition out of `state`; returning
    /// `false` blocks the transition. The guard receives the destination.
    pub fn on_exit<F>(&mut self, state: S, guard: F) -> &mut Self
    where
        F: FnMut(&S) -> bool + 'static,
    {
        self.exit_guards
            .entry(state)
            .or_default()
            .push(Box::new(guard));
        self
    }

    /// Handle attempts to take unregistered transitions. Returning `true`
    /// swallows the attempt; returning `false` lets `go` fail.
    ///
    /// Only the first handler is kept, later registrations are ignored.
    pub fn on_invalid_transition<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&S, &S) -> bool + 'static,
    {
        if self.invalid_transition_handler.is_some() {
            tracing::warn!("invalid transition handler already registered, ignoring");
        } else {
            self.invalid_transition_handler = Some(Box::new(handler));
        }
        self
    }

    /// Install the hook fired with `(from, to)` after every committed
    /// transition, once all observers have run. Replaces any previous hook.
    pub fn set_on_transition<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut(&S, &S) + 'static,
    {
        self.on_transition = Some(Box::new(hook));
        self
    }

    fn attempt(
        &mut self,
        state: S,
        payload: Option<P>,
    ) -> Result<TransitionOutcome<S>, TransitionError> {
        if self.can_go(&state) {
            return Ok(self.transition_to(state, payload.as_ref()));
        }

        let suppressed = match self.invalid_transition_handler.as_mut() {
            Some(handler) => handler(&self.current, &state),
            None => false,
        };

        if suppressed {
            tracing::debug!(
                from = self.current.name(),
                to = state.name(),
                "invalid transition suppressed"
            );
            return Ok(TransitionOutcome::Suppressed);
        }

        tracing::debug!(
            from = self.current.name(),
            to = state.name(),
            "invalid transition rejected"
        );
        Err(TransitionError::invalid(self.current.name(), state.name()))
    }

    fn transition_to(&mut self, state: S, payload: Option<&P>) -> TransitionOutcome<S> {
        let can_exit = match self.exit_guards.get_mut(&self.current) {
            Some(guards) => all_pass(guards.iter_mut().map(|guard| guard(&state))),
            None => true,
        };

        let can_enter = match self.enter_guards.get_mut(&state) {
            Some(guards) => all_pass(
                guards
                    .iter_mut()
                    .map(|guard| guard(&self.current, payload)),
            ),
            None => true,
        };

        if !(can_exit && can_enter) {
            tracing::trace!(
                from = self.current.name(),
                to = state.name(),
                can_exit,
                can_enter,
                "transition vetoed by guard"
            );
            return TransitionOutcome::Vetoed;
        }

        let old = std::mem::replace(&mut self.current, state);

        if let Some(observers) = self.on_enter_observers.get_mut(&self.current) {
            for observer in observers.iter_mut() {
                observer(&old, payload);
            }
        }

        if let Some(hook) = self.on_transition.as_mut() {
            hook(&old, &self.current);
        }

        tracing::debug!(
            from = old.name(),
            to = self.current.name(),
            "transitioned"
        );

        TransitionOutcome::Transitioned {
            from: old,
            to: self.current.clone(),
        }
    }
}

impl<S: State, P> fmt::Debug for StateMachine<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("start", &self.start)
            .field("config", &self.config)
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}
