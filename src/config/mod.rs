//! Configuration module for rule definitions
//!
//! This module handles deserialization of rule book seed data from JSON.

mod definition;

pub use definition::*;

use crate::error::Result;

impl RuleBookConfig {
    /// Deserialize a config document
    /// Expected format: {"rules": [{"name": ..., "rule_string": ...}, ...]}
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
