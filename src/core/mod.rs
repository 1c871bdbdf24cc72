//! Core state machine types.
//!
//! This module contains the building blocks the machine is made of:
//! - State definitions via the `State` trait
//! - Permitted transitions as `TransitionFunction` values
//! - Guard, observer and hook callback types

mod guard;
mod state;
mod transition;

pub(crate) use guard::all_pass;
pub use guard::{EnterGuard, ExitGuard, InvalidTransitionHandler, Observer, TransitionHook};
pub use state::State;
pub use transition::TransitionFunction;
