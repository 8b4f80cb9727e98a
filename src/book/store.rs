//! Rule book storage

use ahash::AHashMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::book::rule::{Rule, RuleId};
use crate::config::RuleBookConfig;
use crate::error::{Result, RuleEngineError};
use crate::record::Record;
use crate::rule::{evaluate, parse};

/// Caller-owned catalog of parsed rules
///
/// Rules are parsed once on insertion and handed out as `Arc<Rule>`, so
/// evaluation never holds the lock while walking a tree.
#[derive(Debug)]
pub struct RuleBook {
    rules: RwLock<AHashMap<RuleId, Arc<Rule>>>,
    next_id: AtomicU64,
}

impl Default for RuleBook {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBook {
    pub fn new() -> Self {
        Self {
            rules: RwLock::new(AHashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Build a rule book seeded with every definition in `config`
    ///
    /// Fails on the first definition that does not parse.
    pub fn from_config(config: &RuleBookConfig) -> Result<Self> {
        let book = Self::new();
        for definition in &config.rules {
            book.create(&definition.name, &definition.rule_string)?;
        }
        debug!(count = book.len(), "Seeded rule book from config");
        Ok(book)
    }

    /// Parse `rule_string` and store it under a fresh id
    pub fn create(&self, name: &str, rule_string: &str) -> Result<Arc<Rule>> {
        let ast = parse(rule_string)?;
        let id = RuleId(self.next_id.fetch_add(1, Ordering::Relaxed));

        let rule = Arc::new(Rule {
            id,
            name: name.to_string(),
            rule_string: rule_string.to_string(),
            ast,
        });

        {
            let mut rules = self.rules.write();
            rules.insert(id, Arc::clone(&rule));
        }

        debug!(%id, name, "Registered rule");
        Ok(rule)
    }

    pub fn get(&self, id: RuleId) -> Option<Arc<Rule>> {
        self.rules.read().get(&id).cloned()
    }

    /// All rules in ascending id order
    pub fn list(&self) -> Vec<Arc<Rule>> {
        let mut rules: Vec<_> = self.rules.read().values().cloned().collect();
        rules.sort_by_key(|rule| rule.id);
        rules
    }

    /// Evaluate a stored rule against `record`
    pub fn evaluate(&self, id: RuleId, record: &Record) -> Result<bool> {
        let rule = self.get(id).ok_or(RuleEngineError::RuleNotFound(id))?;
        Ok(evaluate(&rule.ast, record)?)
    }

    pub fn delete(&self, id: RuleId) -> Result<()> {
        let removed = self.rules.write().remove(&id);
        match removed {
            Some(rule) => {
                debug!(%id, name = %rule.name, "Deleted rule");
                Ok(())
            }
            None => Err(RuleEngineError::RuleNotFound(id)),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.read().is_empty()
    }
}
