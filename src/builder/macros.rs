//! Macros for ergonomic state machine construction.

/// Generate a state enum with a `State` implementation and a `variants()`
/// function listing every variant in declaration order.
///
/// `variants()` is what [`StateMachine::from_any`](crate::StateMachine::from_any)
/// and [`TransitionBuilder::to_any`](crate::TransitionBuilder::to_any) expect.
///
/// # Example
///
/// ```
/// use typestate::{state_enum, StateMachine};
///
/// state_enum! {
///     pub enum Elevator {
///         DoorsOpened,
///         DoorsClosed,
///         Moving,
///     }
/// }
///
/// let mut fsm: StateMachine<Elevator> = StateMachine::new(Elevator::DoorsOpened);
/// fsm.from_any(Elevator::variants()).to([Elevator::DoorsClosed]);
///
/// assert!(fsm.can_go(&Elevator::DoorsClosed));
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis fn variants() -> ::std::vec::Vec<Self> {
                ::std::vec![$(Self::$variant),*]
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Initial,
            Processing,
            Complete,
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Initial.name(), "Initial");
        assert_eq!(TestState::Processing.name(), "Processing");
        assert_eq!(TestState::Complete.name(), "Complete");
    }

    #[test]
    fn variants_are_listed_in_declaration_order() {
        assert_eq!(
            TestState::variants(),
            vec![
                TestState::Initial,
                TestState::Processing,
                TestState::Complete
            ]
        );
    }

    #[test]
    fn state_enum_supports_visibility() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_eq!(PublicState::variants().len(), 2);
    }

    #[test]
    fn state_enum_keeps_attributes() {
        state_enum! {
            /// Lights of a crossing.
            enum Light {
                #[allow(dead_code)]
                Red,
                Green,
            }
        }

        assert_eq!(Light::Green.name(), "Green");
    }
}
