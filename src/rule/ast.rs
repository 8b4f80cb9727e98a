//! Abstract Syntax Tree for rule expressions

use serde::{Deserialize, Serialize};
use std::fmt;

/// AST node for rule expressions
///
/// Serialized as an internally tagged record, e.g.
/// `{"type":"operand","field":"age","comparator":">","value":30}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AstNode {
    /// Connective like "AND" joining two sub-rules
    Operator {
        operator: Comparator,
        left: Box<AstNode>,
        right: Box<AstNode>,
    },
    /// Single comparison like "age > 30"
    Operand(Operand),
}

/// Leaf comparison of one record field against a literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operand {
    pub field: String,
    pub comparator: Comparator,
    pub value: Literal,
}

/// Connectives and comparison operators
///
/// Both node kinds draw from this one set; which members are valid
/// for which node kind is checked by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparator {
    #[serde(rename = "AND")]
    And,
    #[serde(rename = "OR")]
    Or,
    /// Greater than (>)
    #[serde(rename = ">")]
    Greater,
    /// Less than (<)
    #[serde(rename = "<")]
    Less,
    /// Equal (=)
    #[serde(rename = "=")]
    Equal,
    /// Greater than or equal (>=)
    #[serde(rename = ">=")]
    GreaterEqual,
    /// Less than or equal (<=)
    #[serde(rename = "<=")]
    LessEqual,
}

impl Comparator {
    /// Candidate lexemes in scan priority order
    pub const LEXEMES: [(&'static str, Comparator); 7] = [
        ("AND", Comparator::And),
        ("OR", Comparator::Or),
        (">", Comparator::Greater),
        ("<", Comparator::Less),
        ("=", Comparator::Equal),
        (">=", Comparator::GreaterEqual),
        ("<=", Comparator::LessEqual),
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::And => "AND",
            Comparator::Or => "OR",
            Comparator::Greater => ">",
            Comparator::Less => "<",
            Comparator::Equal => "=",
            Comparator::GreaterEqual => ">=",
            Comparator::LessEqual => "<=",
        }
    }

    /// True for AND / OR
    pub fn is_connective(self) -> bool {
        matches!(self, Comparator::And | Comparator::Or)
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Literal value on the right-hand side of a comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// Unsigned digit sequence
    Number(u64),
    /// Single-quoted text, quotes stripped
    Text(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Number(n) => write!(f, "{}", n),
            Literal::Text(s) => write!(f, "'{}'", s),
        }
    }
}

impl AstNode {
    /// Build an operator node from two owned subtrees
    pub fn operator(operator: Comparator, left: AstNode, right: AstNode) -> Self {
        AstNode::Operator {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Build an operand leaf
    pub fn operand(field: impl Into<String>, comparator: Comparator, value: Literal) -> Self {
        AstNode::Operand(Operand {
            field: field.into(),
            comparator,
            value,
        })
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        match self {
            AstNode::Operand(_) => 1,
            AstNode::Operator { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }
}

/// Renders canonical rule text with nested connectives parenthesized.
///
/// Text rendered from a tree that `parse` produced parses back to the same
/// tree. Hand-built or deserialized trees may not: a text literal containing
/// `'` or a field that is not an identifier renders unparseable text.
impl fmt::Display for AstNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AstNode::Operand(op) => write!(f, "{} {} {}", op.field, op.comparator, op.value),
            AstNode::Operator {
                operator,
                left,
                right,
            } => {
                write_child(f, left)?;
                write!(f, " {} ", operator)?;
                write_child(f, right)
            }
        }
    }
}

fn write_child(f: &mut fmt::Formatter<'_>, node: &AstNode) -> fmt::Result {
    match node {
        AstNode::Operand(_) => write!(f, "{}", node),
        AstNode::Operator { .. } => write!(f, "({})", node),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::parser::{parse, MAX_DEPTH};

    fn sample() -> AstNode {
        AstNode::operator(
            Comparator::And,
            AstNode::operand("age", Comparator::Greater, Literal::Number(30)),
            AstNode::operand(
                "department",
                Comparator::Equal,
                Literal::Text("Engineering".to_string()),
            ),
        )
    }

    #[test]
    fn test_display_operand() {
        let node = AstNode::operand("salary", Comparator::GreaterEqual, Literal::Number(50000));
        assert_eq!(node.to_string(), "salary >= 50000");
    }

    #[test]
    fn test_display_parenthesizes_nested_operators() {
        let node = AstNode::operator(
            Comparator::Or,
            sample(),
            AstNode::operand("experience", Comparator::Greater, Literal::Number(5)),
        );
        assert_eq!(
            node.to_string(),
            "(age > 30 AND department = 'Engineering') OR experience > 5"
        );
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "type": "operator",
                "operator": "AND",
                "left": {"type": "operand", "field": "age", "comparator": ">", "value": 30},
                "right": {
                    "type": "operand",
                    "field": "department",
                    "comparator": "=",
                    "value": "Engineering"
                }
            })
        );
    }

    #[test]
    fn test_unknown_node_type_is_rejected() {
        let json = r#"{"type":"function","name":"max"}"#;
        assert!(serde_json::from_str::<AstNode>(json).is_err());
    }

    #[test]
    fn test_parsed_tree_renders_reparseable_text() {
        let rule = "(age > 30 AND department = 'Engineering') OR (salary >= 50000 OR experience > 5)";
        let ast = parse(rule).unwrap();
        assert_eq!(ast.to_string(), rule);
        assert_eq!(parse(&ast.to_string()).unwrap(), ast);
    }

    #[test]
    fn test_hand_built_tree_may_not_reparse() {
        let quoted = AstNode::operand(
            "department",
            Comparator::Equal,
            Literal::Text("R'n'D".to_string()),
        );
        assert_eq!(quoted.to_string(), "department = 'R'n'D'");
        assert!(parse(&quoted.to_string()).is_err());

        let bad_field = AstNode::operand("base salary", Comparator::Greater, Literal::Number(1));
        assert!(parse(&bad_field.to_string()).is_err());
    }

    #[test]
    fn test_deepest_parsed_tree_survives_json() {
        let rule = (0..MAX_DEPTH)
            .map(|i| format!("age > {}", i))
            .collect::<Vec<_>>()
            .join(" AND ");
        let ast = parse(&rule).unwrap();

        let json = serde_json::to_string(&ast).unwrap();
        let restored: AstNode = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ast);
    }

    #[test]
    fn test_node_count() {
        assert_eq!(sample().node_count(), 3);
    }
}
