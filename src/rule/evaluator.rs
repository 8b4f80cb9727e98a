//! Rule evaluator

use crate::error::EvaluationError;
use crate::record::{FieldValue, Record};
use crate::rule::ast::{AstNode, Comparator, Literal, Operand};

type EvalResult<T> = std::result::Result<T, EvaluationError>;

/// Evaluate an AST against a Record
///
/// Both sides of a connective are always evaluated, so an invalid node
/// anywhere in the tree is reported regardless of the record's values.
pub fn evaluate(ast: &AstNode, record: &Record) -> EvalResult<bool> {
    match ast {
        AstNode::Operand(operand) => evaluate_operand(operand, record),
        AstNode::Operator {
            operator,
            left,
            right,
        } => {
            let left = evaluate(left, record)?;
            let right = evaluate(right, record)?;

            match operator {
                Comparator::And => Ok(left && right),
                Comparator::Or => Ok(left || right),
                other => Err(EvaluationError::UnsupportedComparator {
                    comparator: *other,
                    context: "operator node",
                }),
            }
        }
    }
}

fn evaluate_operand(operand: &Operand, record: &Record) -> EvalResult<bool> {
    match record.get(&operand.field)? {
        FieldValue::Number(field_value) => {
            let literal = numeric_literal(&operand.value)?;
            compare_numbers(field_value, literal, operand.comparator)
        }
        FieldValue::Text(field_value) => match operand.comparator {
            Comparator::Equal => Ok(match &operand.value {
                Literal::Text(text) => field_value == text.as_str(),
                Literal::Number(n) => field_value == n.to_string(),
            }),
            other => Err(EvaluationError::UnsupportedComparator {
                comparator: other,
                context: "string field",
            }),
        },
    }
}

fn numeric_literal(value: &Literal) -> EvalResult<f64> {
    match value {
        Literal::Number(n) => Ok(*n as f64),
        Literal::Text(text) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| EvaluationError::NonNumericLiteral(text.clone())),
    }
}

#[inline]
fn compare_numbers(field_value: f64, literal: f64, comparator: Comparator) -> EvalResult<bool> {
    match comparator {
        Comparator::Greater => Ok(field_value > literal),
        Comparator::Less => Ok(field_value < literal),
        Comparator::Equal => Ok(field_value == literal),
        Comparator::GreaterEqual => Ok(field_value >= literal),
        Comparator::LessEqual => Ok(field_value <= literal),
        Comparator::And | Comparator::Or => Err(EvaluationError::UnsupportedComparator {
            comparator,
            context: "operand node",
        }),
    }
}
