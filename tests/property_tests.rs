//! Property-based tests for the state machine.
//!
//! These tests use proptest to check legality and protocol properties
//! across randomly generated transition tables and walks.

use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;
use typestate::{
    state_enum, MachineConfig, State, StateMachine, TransitionError, TransitionOutcome,
};

state_enum! {
    enum TestState {
        Initial,
        Processing,
        Complete,
        Failed,
    }
}

prop_compose! {
    fn arbitrary_state()(variant in 0..4usize) -> TestState {
        TestState::variants()[variant]
    }
}

fn arbitrary_pairs() -> impl Strategy<Value = Vec<(TestState, TestState)>> {
    prop::collection::vec((arbitrary_state(), arbitrary_state()), 0..12)
}

fn machine_with(
    start: TestState,
    pairs: &[(TestState, TestState)],
    allow_self: bool,
) -> StateMachine<TestState> {
    let config = MachineConfig::default().allow_implicit_self_transition(allow_self);
    let mut fsm = StateMachine::with_config(start, config);
    for (from, to) in pairs {
        fsm.from([*from]).to([*to]);
    }
    fsm
}

proptest! {
    #[test]
    fn can_go_matches_declared_pairs(
        start in arbitrary_state(),
        target in arbitrary_state(),
        pairs in arbitrary_pairs(),
        allow_self in any::<bool>(),
    ) {
        let fsm = machine_with(start, &pairs, allow_self);

        let declared = pairs
            .iter()
            .any(|(from, to)| *from == start && *to == target && from != to);
        let expected = (allow_self && start == target) || declared;

        prop_assert_eq!(fsm.can_go(&target), expected);
    }

    #[test]
    fn table_never_stores_self_pairs_or_duplicates(pairs in arbitrary_pairs()) {
        let fsm = machine_with(TestState::Initial, &pairs, false);

        let mut seen = HashSet::new();
        for transition in fsm.transitions() {
            prop_assert!(!transition.is_self_transition());
            prop_assert!(seen.insert(transition.clone()));
        }
    }

    #[test]
    fn cross_product_registers_every_distinct_pair(
        from in prop::collection::vec(arbitrary_state(), 0..4),
        to in prop::collection::vec(arbitrary_state(), 0..4),
    ) {
        let mut fsm: StateMachine<TestState> = StateMachine::new(TestState::Initial);
        fsm.from(from.clone()).to(to.clone());

        for source in &from {
            for target in &to {
                prop_assert_eq!(fsm.can_go_between(source, target), source != target);
            }
        }
    }

    #[test]
    fn from_any_self_legality_depends_only_on_flag(
        target in arbitrary_state(),
        allow_self in any::<bool>(),
    ) {
        let config = MachineConfig::default().allow_implicit_self_transition(allow_self);
        let mut fsm: StateMachine<TestState> = StateMachine::with_config(target, config);
        fsm.from_any(TestState::variants()).to([target]);

        for state in TestState::variants() {
            if state != target {
                prop_assert!(fsm.can_go_between(&state, &target));
            }
        }
        prop_assert_eq!(fsm.can_go(&target), allow_self);
    }

    #[test]
    fn go_follows_can_go(
        pairs in arbitrary_pairs(),
        walk in prop::collection::vec(arbitrary_state(), 1..10),
    ) {
        let mut fsm = machine_with(TestState::Initial, &pairs, false);

        for target in walk {
            let before = *fsm.current_state();
            let permitted = fsm.can_go(&target);

            match fsm.go(target) {
                Ok(TransitionOutcome::Transitioned { from, to }) => {
                    prop_assert!(permitted);
                    prop_assert_eq!(from, before);
                    prop_assert_eq!(to, target);
                    prop_assert!(fsm.is(&target));
                }
                Ok(outcome) => {
                    prop_assert!(false, "unexpected outcome {:?}", outcome);
                }
                Err(TransitionError::InvalidTransition { from, to }) => {
                    prop_assert!(!permitted);
                    prop_assert_eq!(from, before.name());
                    prop_assert_eq!(to, target.name());
                    prop_assert!(fsm.is(&before));
                }
            }
        }
    }

    #[test]
    fn vetoing_guard_never_changes_state(
        pairs in arbitrary_pairs(),
        walk in prop::collection::vec(arbitrary_state(), 1..10),
        blocked in arbitrary_state(),
    ) {
        let mut fsm = machine_with(TestState::Initial, &pairs, false);
        let entered = Rc::new(Cell::new(false));
        let flag = Rc::clone(&entered);
        fsm.on_enter(blocked, |_, _| false)
            .on(blocked, move |_, _| flag.set(true));

        for target in walk {
            let _ = fsm.go(target);
        }

        prop_assert!(!entered.get());
        if blocked != TestState::Initial {
            prop_assert!(!fsm.is(&blocked));
        }
    }

    #[test]
    fn reset_always_returns_to_start(
        start in arbitrary_state(),
        pairs in arbitrary_pairs(),
        walk in prop::collection::vec(arbitrary_state(), 0..10),
    ) {
        let mut fsm = machine_with(start, &pairs, true);
        let hooked = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hooked);
        fsm.set_on_transition(move |_, _| counter.set(counter.get() + 1));

        for target in walk {
            let _ = fsm.go(target);
        }
        let fired = hooked.get();

        fsm.reset();

        prop_assert!(fsm.is(&start));
        prop_assert_eq!(hooked.get(), fired);
    }

    #[test]
    fn suppressing_handler_never_errors(
        pairs in arbitrary_pairs(),
        walk in prop::collection::vec(arbitrary_state(), 1..10),
    ) {
        let mut fsm = machine_with(TestState::Initial, &pairs, false);
        fsm.on_invalid_transition(|_, _| true);

        for target in walk {
            let before = *fsm.current_state();
            let permitted = fsm.can_go(&target);
            let outcome = fsm.go(target);

            prop_assert!(outcome.is_ok());
            if !permitted {
                prop_assert_eq!(outcome, Ok(TransitionOutcome::Suppressed));
                prop_assert!(fsm.is(&before));
            }
        }
    }
}
