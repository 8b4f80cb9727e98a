//! Rule parsing and evaluation module
//!
//! This module handles parsing rule strings like
//! "age > 30 AND department = 'Engineering'" and evaluating them against a Record.

mod ast;
mod evaluator;
pub mod parser;


pub use ast::*;
pub use evaluator::*;
pub use parser::{parse, MAX_DEPTH};
