//! Rule Engine Core - eligibility rule parser and evaluator
//!
//! Rules are short boolean expressions such as
//! `age > 30 AND department = 'Engineering'`. A rule is parsed once into an
//! [`AstNode`] and can then be evaluated any number of times against a
//! [`Record`]:
//!
//! ```
//! use rule_engine_core::{evaluate, parse, Record};
//!
//! let ast = parse("age > 30 AND department = 'Engineering'").unwrap();
//! let record = Record::new(35, "Engineering", 72000.0, 6.0);
//! assert!(evaluate(&ast, &record).unwrap());
//! ```
//!
//! AND and OR share one precedence level and associate to the left;
//! use parentheses to group.

pub mod book;
pub mod config;
pub mod error;
pub mod record;
pub mod rule;

pub use book::{Rule, RuleBook, RuleId};
pub use config::{RuleBookConfig, RuleDefinition};
pub use error::{EvaluationError, ParseError, Result, RuleEngineError};
pub use record::{Field, FieldValue, Record};
pub use rule::{evaluate, parse, AstNode, Comparator, Literal, Operand, MAX_DEPTH};
