//! Rule string parser
//!
//! Recursive descent over the grammar
//!
//! ```text
//! expression := term ( ("AND" | "OR") term )*
//! term       := "(" expression ")" | comparison
//! comparison := identifier comparator value
//! value      := "'" any-char-except-quote* "'" | digit+
//! ```
//!
//! AND and OR share one precedence level and chain to the left.
//! Trees deeper than [`MAX_DEPTH`] and parentheses nested deeper than
//! [`MAX_DEPTH`] are rejected.

use crate::error::ParseError;
use crate::rule::ast::{AstNode, Comparator, Literal, Operand};

type ParseResult<T> = std::result::Result<T, ParseError>;

/// Maximum tree depth and parenthesis nesting accepted by [`parse`]
///
/// A chain of `n` comparisons is `n` levels deep.
pub const MAX_DEPTH: usize = 100;

/// Parse a rule string into an AST
pub fn parse(rule: &str) -> ParseResult<AstNode> {
    let mut cursor = Cursor::new(rule);
    let (ast, _) = cursor.expression()?;

    cursor.skip_whitespace();
    if let Some(c) = cursor.peek() {
        return Err(cursor.error(format!("unexpected '{}' after expression", c)));
    }

    Ok(ast)
}

/// Scan state for a single `parse` call
struct Cursor<'a> {
    input: &'a str,
    pos: usize,
    /// Open parentheses enclosing the current position
    nesting: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            nesting: 0,
        }
    }

    /// Returns the subtree together with its depth
    fn expression(&mut self) -> ParseResult<(AstNode, usize)> {
        let (mut node, mut depth) = self.term()?;

        while let Some(operator) = self.comparator() {
            let (right, right_depth) = self.term()?;
            depth = depth.max(right_depth) + 1;
            if depth > MAX_DEPTH {
                return Err(self.error("rule nested too deeply"));
            }
            node = AstNode::operator(operator, node, right);
        }

        Ok((node, depth))
    }

    fn term(&mut self) -> ParseResult<(AstNode, usize)> {
        self.skip_whitespace();

        match self.peek() {
            None => Err(self.error("unexpected end of input, expected a comparison or '('")),
            Some('(') => {
                if self.nesting == MAX_DEPTH {
                    return Err(self.error("rule nested too deeply"));
                }
                self.bump();
                self.nesting += 1;
                let subtree = self.expression()?;
                self.nesting -= 1;

                self.skip_whitespace();
                if self.peek() != Some(')') {
                    return Err(self.error("expected ')'"));
                }
                self.bump();
                Ok(subtree)
            }
            Some(_) => Ok((self.comparison()?, 1)),
        }
    }

    fn comparison(&mut self) -> ParseResult<AstNode> {
        let field = self.identifier()?;
        let comparator = self
            .comparator()
            .ok_or_else(|| self.error(format!("expected comparator after '{}'", field)))?;
        let value = self.value()?;

        Ok(AstNode::Operand(Operand {
            field,
            comparator,
            value,
        }))
    }

    fn identifier(&mut self) -> ParseResult<String> {
        self.skip_whitespace();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !(c.is_alphanumeric() || c == '_') {
                break;
            }
            self.bump();
        }

        if self.pos == start {
            return Err(match self.peek() {
                Some(c) => self.error(format!("expected identifier, found '{}'", c)),
                None => self.error("expected identifier, found end of input"),
            });
        }

        Ok(self.input[start..self.pos].to_string())
    }

    /// Scan the shared connective/comparator list; the longest match wins.
    fn comparator(&mut self) -> Option<Comparator> {
        self.skip_whitespace();
        let rest = self.rest();

        let mut best: Option<(&str, Comparator)> = None;
        for (lexeme, comparator) in Comparator::LEXEMES {
            if rest.starts_with(lexeme) && best.map_or(true, |(b, _)| lexeme.len() > b.len()) {
                best = Some((lexeme, comparator));
            }
        }

        let (lexeme, comparator) = best?;
        self.pos += lexeme.len();
        Some(comparator)
    }

    fn value(&mut self) -> ParseResult<Literal> {
        self.skip_whitespace();

        match self.peek() {
            Some('\'') => self.string_literal(),
            Some(c) if c.is_ascii_digit() => self.number_literal(),
            Some('-') => Err(self.error("negative numeric literals are not supported")),
            Some(c) => Err(self.error(format!("expected value, found '{}'", c))),
            None => Err(self.error("expected value, found end of input")),
        }
    }

    fn string_literal(&mut self) -> ParseResult<Literal> {
        let open = self.pos;
        self.bump();
        let start = self.pos;

        match self.rest().find('\'') {
            Some(len) => {
                self.pos = start + len + 1;
                Ok(Literal::Text(self.input[start..start + len].to_string()))
            }
            None => Err(ParseError::new(open, "unterminated string literal")),
        }
    }

    fn number_literal(&mut self) -> ParseResult<Literal> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.bump();
        }

        if self.peek() == Some('.') {
            return Err(self.error("fractional numeric literals are not supported"));
        }

        let digits = &self.input[start..self.pos];
        digits
            .parse::<u64>()
            .map(Literal::Number)
            .map_err(|_| ParseError::new(start, format!("numeric literal out of range: {}", digits)))
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.bump();
        }
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    #[inline]
    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn error(&self, reason: impl Into<String>) -> ParseError {
        ParseError::new(self.pos, reason)
    }
}
