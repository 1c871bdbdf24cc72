//! Typestate: a small synchronous finite state machine
//!
//! A machine tracks a single current state, checks proposed moves against a
//! table of permitted transitions, and runs caller-supplied callbacks around
//! every move. Guards may veto a move before anything changes; observers and
//! a post-transition hook run once it has committed.
//!
//! # Core Concepts
//!
//! - **State**: any `Clone + Eq + Hash + Debug` value implementing `State`,
//!   typically an enum declared with [`state_enum!`]
//! - **Transitions**: directed pairs declared with `from(...).to(...)`
//! - **Guards**: `on_enter`/`on_exit` callbacks that can block a move
//! - **Observers**: `on` callbacks and the `set_on_transition` hook
//!
//! # Example
//!
//! ```rust
//! use typestate::{state_enum, StateMachine, TransitionOutcome};
//!
//! state_enum! {
//!     enum Elevator {
//!         DoorsOpened,
//!         DoorsClosed,
//!         Moving,
//!     }
//! }
//!
//! let mut fsm: StateMachine<Elevator> = StateMachine::new(Elevator::DoorsOpened);
//! fsm.from([Elevator::DoorsOpened]).to([Elevator::DoorsClosed]);
//! fsm.from([Elevator::DoorsClosed]).to([Elevator::DoorsOpened, Elevator::Moving]);
//! fsm.from([Elevator::Moving]).to([Elevator::DoorsClosed]);
//!
//! let hands_in_door = true;
//! fsm.on_enter(Elevator::DoorsClosed, move |_, _| !hands_in_door);
//!
//! assert_eq!(fsm.go(Elevator::DoorsClosed).unwrap(), TransitionOutcome::Vetoed);
//! assert!(fsm.is(&Elevator::DoorsOpened));
//! assert!(fsm.go(Elevator::Moving).is_err());
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::TransitionBuilder;
pub use crate::core::{State, TransitionFunction};
pub use crate::error::TransitionError;
pub use crate::machine::{MachineConfig, StateMachine, TransitionOutcome};

/// Alternative name for [`StateMachine`], kept for code written against the
/// older `FiniteStateMachine` naming.
pub type FiniteStateMachine<S, P = ()> = StateMachine<S, P>;
