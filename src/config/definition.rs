//! Rule definition structures

use serde::Deserialize;

/// A named rule in source form
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuleDefinition {
    pub name: String,
    #[serde(alias = "ruleString")]
    pub rule_string: String,
}

impl RuleDefinition {
    pub fn new(name: impl Into<String>, rule_string: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rule_string: rule_string.into(),
        }
    }
}

/// Rules to seed a [`RuleBook`](crate::book::RuleBook) with
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuleBookConfig {
    #[serde(default)]
    pub rules: Vec<RuleDefinition>,
}

impl Default for RuleBookConfig {
    fn default() -> Self {
        Self {
            rules: vec![
                RuleDefinition::new(
                    "Senior Sales Rule",
                    "((age > 30 AND department = 'Sales') OR (age < 25 AND department = 'Marketing')) AND (salary > 50000 OR experience > 5)",
                ),
                RuleDefinition::new(
                    "Marketing Rule",
                    "((age > 30 AND department = 'Marketing')) AND (salary > 20000 OR experience > 5)",
                ),
            ],
        }
    }
}
