//! Stored rule structures

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::rule::AstNode;

/// Identifier assigned to a rule when it is added to a [`RuleBook`](super::RuleBook)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(pub u64);

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named rule together with the AST parsed from its text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub id: RuleId,
    pub name: String,
    pub rule_string: String,
    pub ast: AstNode,
}
