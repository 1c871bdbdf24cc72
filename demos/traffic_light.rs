//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic state transitions (states repeat)
//! - Observers fired on entering a state
//! - A post-transition hook counting completed moves
//! - An invalid-transition handler that ignores impossible requests
//!
//! Run with: cargo run --example traffic_light

use std::cell::Cell;
use std::rc::Rc;
use typestate::{state_enum, State, StateMachine};

state_enum! {
    enum TrafficLight {
        Red,
        Yellow,
        Green,
    }
}

fn main() {
    println!("=== Traffic Light State Machine ===\n");

    let mut light: StateMachine<TrafficLight> = StateMachine::new(TrafficLight::Red);
    light
        .from([TrafficLight::Red])
        .to([TrafficLight::Green])
        .from([TrafficLight::Green])
        .to([TrafficLight::Yellow])
        .from([TrafficLight::Yellow])
        .to([TrafficLight::Red]);

    let cycles = Rc::new(Cell::new(0));
    let counter = Rc::clone(&cycles);
    light
        .on(TrafficLight::Green, |_, _| println!("  Go!"))
        .on(TrafficLight::Yellow, |_, _| println!("  Caution"))
        .on(TrafficLight::Red, move |_, _| {
            counter.set(counter.get() + 1);
            println!("  Stop");
        })
        .on_invalid_transition(|from, to| {
            println!("  ignoring request {} -> {}", from.name(), to.name());
            true
        });

    println!("Initial state: {:?}\n", light.current_state());

    for _ in 0..2 {
        for next in [TrafficLight::Green, TrafficLight::Yellow, TrafficLight::Red] {
            light.go(next).unwrap();
        }
    }

    println!("\nSkipping yellow is not allowed:");
    light.go(TrafficLight::Green).unwrap();
    light.go(TrafficLight::Red).unwrap();

    println!("\nCompleted cycles: {}", cycles.get());
    println!("Current state: {:?}", light.current_state());

    println!("\n=== Example Complete ===");
}
