//! Guard and observer callbacks for controlling state transitions.
//!
//! Guards run before the current state changes and may veto a transition by
//! returning `false`. Observers run after a transition commits and cannot
//! veto anything.
//!
//! Callbacks are plain `FnMut` closures with no `Send` bound: the machine is
//! driven from a single thread and callbacks are free to capture `Rc` or
//! `Cell` state.

/// Guard consulted before leaving a state. Receives the prospective
/// destination.
pub type ExitGuard<S> = Box<dyn FnMut(&S) -> bool>;

/// Guard consulted before entering a state. Receives the state being left
/// and the payload passed to `go_with`, if any.
pub type EnterGuard<S, P> = Box<dyn FnMut(&S, Option<&P>) -> bool>;

/// Observer fired after a state has been entered. Receives the previous
/// state and the transition payload, if any.
pub type Observer<S, P> = Box<dyn FnMut(&S, Option<&P>)>;

/// Hook fired once after every committed transition with `(from, to)`.
pub type TransitionHook<S> = Box<dyn FnMut(&S, &S)>;

/// Handler for attempts to take a transition that is not registered.
/// Returning `true` swallows the attempt instead of reporting an error.
pub type InvalidTransitionHandler<S> = Box<dyn FnMut(&S, &S) -> bool>;

/// Combine guard results into a single verdict.
///
/// Every result is pulled from the iterator, even after one of them is
/// `false`, so every guard in the set runs.
pub(crate) fn all_pass<I>(results: I) -> bool
where
    I: IntoIterator<Item = bool>,
{
    results.into_iter().fold(true, |verdict, passed| verdict & passed)
}
