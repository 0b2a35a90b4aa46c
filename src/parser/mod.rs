//! Arithmetic expression parser
//!
//! This module transforms a one-line expression into a binary syntax tree:
//! - [`lexer`]: Tokenization (expression text → tokens)
//! - `grammar`: One function per grammar nonterminal
//! - [`parse`]: The [`Parser`] entry point, error types, and tree assembly
//! - [`ast`]: Syntax tree definitions and traversal
//!
//! # Supported expressions
//!
//! - Operands: unsigned integer literals (leading zeros kept) and single ASCII letters
//! - Operators: `+`, `-`, `*`, `/`
//! - No parentheses, no unary minus, no floating point
//!
//! # Parser Implementation
//!
//! Hand-written predictive (LL(1)) recursive descent parser. No external parser
//! generator dependencies.

pub mod ast;
mod grammar;
pub mod lexer;
pub mod parse;

pub use ast::{NodeId, NodeKind, SyntaxNode, SyntaxTree};
pub use lexer::{InputError, Operator, Token, TokenType, Tokenizer};
pub use parse::{ErrorKind, Expected, ParseError, Parser, SyntaxError, MAX_NESTING};

/// Parse `expression` and render it in prefix notation.
pub fn to_prefix(expression: &str) -> Result<String, ParseError> {
    Parser::new().parse(expression).map(|tree| tree.print_tree())
}
