//! Interception policy configuration.
//!
//! Enablement is an explicit value handed to the policy at construction,
//! not a process-wide mutable toggle.

use serde::{Deserialize, Serialize};

/// Dispatcher priority used when no explicit order is configured.
pub const DEFAULT_EXECUTION_ORDER: i32 = 91;

/// Configuration for the claim interception policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Whether the policy runs at all. A disabled policy passes every
    /// callback through untouched.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Dispatcher priority override. `None` falls back to
    /// [`DEFAULT_EXECUTION_ORDER`].
    #[serde(default)]
    pub order: Option<i32>,
}

impl PolicyConfig {
    /// The effective priority the host dispatcher should order this policy
    /// by. A configured value takes precedence over the default.
    #[must_use]
    pub fn execution_order(&self) -> i32 {
        self.order.unwrap_or(DEFAULT_EXECUTION_ORDER)
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            order: None,
        }
    }
}

fn default_enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PolicyConfig::default();
        assert!(config.enabled);
        assert_eq!(config.execution_order(), DEFAULT_EXECUTION_ORDER);
    }

    #[test]
    fn test_config_serde_defaults() {
        let config: PolicyConfig = serde_json::from_str("{}").unwrap();
        assert!(config.enabled);
        assert_eq!(config.order, None);
        assert_eq!(config.execution_order(), 91);
    }

    #[test]
    fn test_configured_order_takes_precedence() {
        let config: PolicyConfig = serde_json::from_str(r#"{"order": 45}"#).unwrap();
        assert_eq!(config.execution_order(), 45);
    }

    #[test]
    fn test_disabled_via_config() {
        let config: PolicyConfig = serde_json::from_str(r#"{"enabled": false}"#).unwrap();
        assert!(!config.enabled);
    }
}
