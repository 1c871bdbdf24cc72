//! Elevator State Machine
//!
//! This example models an elevator whose doors refuse to close while
//! something is in the way, and a small view that re-checks which buttons
//! are enabled after every move.
//!
//! Key concepts:
//! - Declaring a transition table with `from(...).to(...)`
//! - Vetoing a transition from an `on_enter` guard
//! - Polling `can_go` to drive a UI
//!
//! Run with: RUST_LOG=debug cargo run --example elevator

use std::cell::Cell;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;
use typestate::{state_enum, StateMachine, TransitionError, TransitionOutcome};

state_enum! {
    enum Elevator {
        DoorsOpened,
        DoorsClosed,
        Moving,
    }
}

struct Panel {
    fsm: StateMachine<Elevator>,
    hands_in_door: Rc<Cell<bool>>,
}

impl Panel {
    fn new() -> Self {
        let mut fsm: StateMachine<Elevator> = StateMachine::new(Elevator::DoorsOpened);

        fsm.from([Elevator::DoorsOpened]).to([Elevator::DoorsClosed]);
        // travel only with the doors shut
        fsm.from([Elevator::DoorsClosed])
            .to([Elevator::DoorsOpened, Elevator::Moving]);
        fsm.from([Elevator::Moving]).to([Elevator::DoorsClosed]);

        let hands_in_door = Rc::new(Cell::new(false));
        let blocked = Rc::clone(&hands_in_door);
        fsm.on_enter(Elevator::DoorsClosed, move |_, _| !blocked.get());

        Self { fsm, hands_in_door }
    }

    fn press(&mut self, target: Elevator) -> Result<(), TransitionError> {
        match self.fsm.go(target)? {
            TransitionOutcome::Transitioned { from, to } => {
                println!("  {:?} -> {:?}", from, to);
            }
            TransitionOutcome::Vetoed => {
                println!("  {:?} refused, still {:?}", target, self.fsm.current_state());
            }
            TransitionOutcome::Suppressed => {}
        }
        self.render();
        Ok(())
    }

    fn render(&self) {
        let enabled: Vec<String> = Elevator::variants()
            .into_iter()
            .filter(|button| self.fsm.can_go(button))
            .map(|button| format!("{:?}", button))
            .collect();
        println!("  buttons enabled: [{}]", enabled.join(", "));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Elevator State Machine ===\n");

    let mut panel = Panel::new();
    panel.render();

    println!("\nSomeone puts a hand in the door:");
    panel.hands_in_door.set(true);
    panel.press(Elevator::DoorsClosed).unwrap();

    println!("\nThe hand is removed:");
    panel.hands_in_door.set(false);
    panel.press(Elevator::DoorsClosed).unwrap();
    panel.press(Elevator::Moving).unwrap();

    println!("\nTrying to open the doors while moving:");
    if let Err(err) = panel.press(Elevator::DoorsOpened) {
        println!("  {}", err);
    }

    panel.press(Elevator::DoorsClosed).unwrap();
    panel.press(Elevator::DoorsOpened).unwrap();

    println!("\n=== Example Complete ===");
}
