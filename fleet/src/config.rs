//! Core configuration knobs

use serde::{Deserialize, Serialize};
use shared::SharedError;
use std::fmt;
use std::str::FromStr;

/// What `load` does with item ids that do not resolve
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingItemPolicy {
    /// Drop unknown ids from the weight sum and the assignment
    #[default]
    Skip,
    /// Fail the whole load with `ItemNotFound`
    Reject,
}

impl fmt::Display for MissingItemPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingItemPolicy::Skip => write!(f, "skip"),
            MissingItemPolicy::Reject => write!(f, "reject"),
        }
    }
}

impl FromStr for MissingItemPolicy {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "skip" => Ok(MissingItemPolicy::Skip),
            "reject" => Ok(MissingItemPolicy::Reject),
            other => Err(SharedError::InvalidConfig {
                field: "missing_items".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Fleet core configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FleetConfig {
    pub missing_items: MissingItemPolicy,
}

impl FleetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing_items(mut self, policy: MissingItemPolicy) -> Self {
        self.missing_items = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_item_policy_parsing() {
        assert_eq!("skip".parse::<MissingItemPolicy>().unwrap(), MissingItemPolicy::Skip);
        assert_eq!(" Reject ".parse::<MissingItemPolicy>().unwrap(), MissingItemPolicy::Reject);

        let err = "ignore".parse::<MissingItemPolicy>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid configuration: missing_items = ignore");
    }

    #[test]
    fn test_default_config_skips_missing_items() {
        let config = FleetConfig::new();
        assert_eq!(config.missing_items, MissingItemPolicy::Skip);

        let strict = FleetConfig::new().with_missing_items(MissingItemPolicy::Reject);
        assert_eq!(strict.missing_items, MissingItemPolicy::Reject);
    }
}
