//! Construction-time configuration for a state machine.

use serde::{Deserialize, Serialize};

/// Options fixed when a machine is created.
///
/// Deserializes with every field optional, so hosts can load it from a
/// partial JSON or TOML document.
///
/// # Example
///
/// ```rust
/// use typestate::MachineConfig;
///
/// let config = MachineConfig::default().allow_implicit_self_transition(true);
/// assert!(config.allow_implicit_self_transition);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    /// Let every state "transition" to itself without a table entry.
    pub allow_implicit_self_transition: bool,
}

impl MachineConfig {
    /// Set whether self-transitions are implicitly permitted.
    pub fn allow_implicit_self_transition(mut self, allow: bool) -> Self {
        self.allow_implicit_self_transition = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_forbids_self_transitions() {
        assert!(!MachineConfig::default().allow_implicit_self_transition);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: MachineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, MachineConfig::default());

        let config: MachineConfig =
            serde_json::from_str(r#"{"allow_implicit_self_transition":true}"#).unwrap();
        assert!(config.allow_implicit_self_transition);
    }
}
