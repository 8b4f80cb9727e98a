//! Error types for the rule engine core

use crate::book::RuleId;
use crate::rule::Comparator;
use thiserror::Error;

/// Malformed rule text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("parse error at position {position}: {reason}")]
pub struct ParseError {
    /// Byte offset into the rule string where parsing failed
    pub position: usize,
    pub reason: String,
}

impl ParseError {
    pub fn new(position: usize, reason: impl Into<String>) -> Self {
        Self {
            position,
            reason: reason.into(),
        }
    }
}

/// A structurally valid AST that cannot be evaluated against a record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvaluationError {
    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("comparator {comparator} is not supported for {context}")]
    UnsupportedComparator {
        comparator: Comparator,
        context: &'static str,
    },

    #[error("non-numeric literal in numeric comparison: {0}")]
    NonNumericLiteral(String),
}

/// Main error type for the rule engine core
#[derive(Error, Debug)]
pub enum RuleEngineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error("Rule not found: {0}")]
    RuleNotFound(RuleId),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl From<serde_json::Error> for RuleEngineError {
    fn from(err: serde_json::Error) -> Self {
        RuleEngineError::Deserialization(err.to_string())
    }
}

/// Result type alias for the rule engine core
pub type Result<T> = std::result::Result<T, RuleEngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new(14, "unterminated string literal");
        assert_eq!(
            err.to_string(),
            "parse error at position 14: unterminated string literal"
        );
    }

    #[test]
    fn test_engine_error_wraps_both_kinds() {
        let parse: RuleEngineError = ParseError::new(0, "empty rule").into();
        assert!(matches!(parse, RuleEngineError::Parse(_)));

        let eval: RuleEngineError = EvaluationError::UnknownField("foo".to_string()).into();
        assert!(matches!(eval, RuleEngineError::Evaluation(_)));
        assert_eq!(eval.to_string(), "unknown field: foo");
    }

    #[test]
    fn test_unsupported_comparator_display() {
        let err = EvaluationError::UnsupportedComparator {
            comparator: Comparator::Greater,
            context: "string field",
        };
        assert_eq!(
            err.to_string(),
            "comparator > is not supported for string field"
        );
    }
}
