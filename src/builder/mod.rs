//! Builder API for declaring transition tables.
//!
//! This module provides the fluent `from(...).to(...)` builder and the
//! `state_enum!` macro for defining state types with minimal boilerplate.

pub mod macros;
pub mod transition;

pub use transition::TransitionBuilder;
