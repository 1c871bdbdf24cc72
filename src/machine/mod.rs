//! The state machine and its transition protocol.
//!
//! A machine owns its current state, the table of permitted transitions and
//! the callbacks registered around them. Transitions run synchronously:
//!
//! 1. every exit guard of the current state is consulted
//! 2. every enter guard of the destination is consulted
//! 3. if none of them objected, the state changes, the destination's
//!    observers fire and finally the post-transition hook runs
//!
//! A guard objecting is not an error; `go` reports it as
//! [`TransitionOutcome::Vetoed`].

mod config;
mod fsm;

pub use config::MachineConfig;
pub use fsm::{StateMachine, TransitionOutcome};
