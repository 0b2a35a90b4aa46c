//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the error types, and the
//! assembly stack the grammar productions build the tree on.
//!
//! # Parser Architecture
//!
//! - This module: Parser struct, errors, tree assembly, and the parse entry point
//! - `grammar`: one function per nonterminal, threading the remaining tokens and
//!   the assembly stack through each call
//!
//! # Tree assembly
//!
//! Factors and operators are pushed onto the stack as they are matched. When
//! `expr` or `term` returns and the stack holds more than two nodes, the top
//! three are folded into one: the operator in the middle takes the most recent
//! node as its left child and the older one as its right child. Because the
//! earlier operand ends up on the right, [`SyntaxTree::pre_order`] visits right
//! before left.

use super::ast::{NodeId, NodeKind, SyntaxNode, SyntaxTree};
use super::grammar;
use super::lexer::{InputError, Operator, Token, TokenType, Tokenizer};
use std::fmt;
use thiserror::Error;
use tracing::{debug, trace};

/// Deepest operator nesting [`Parser::parse`] accepts.
///
/// Every operator nests the grammar one call deeper, so this caps stack use;
/// longer lines fail with [`SyntaxError::TooDeep`].
pub const MAX_NESTING: usize = 500;

/// What a production was looking for when the tokens ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Factor,
    Type(TokenType),
    Operator(Operator),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Factor => f.write_str("factor"),
            Expected::Type(token_type) => write!(f, "{}", token_type),
            Expected::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Grammar violation found while parsing a token sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// `match` saw a token other than the operator it needed.
    #[error("expected {expected}, found '{found}'")]
    Unexpected { expected: Operator, found: Token },

    /// The token sequence ran out.
    #[error("expected {expected}, found end of input")]
    UnexpectedEnd { expected: Expected },

    /// A factor must be a number or an identifier.
    #[error("expected number or id, found {} '{found}'", .found.token_type())]
    NotAFactor { found: Token },

    #[error("expected {expected}, found {} '{found}'", .found.token_type())]
    WrongType { expected: TokenType, found: Token },

    /// Tokens were left after a complete expression.
    #[error("unconsumed tokens after expression: {}", join_tokens(.tokens))]
    Leftover { tokens: Vec<Token> },

    /// Operators nested past [`MAX_NESTING`] productions.
    #[error("expression nests deeper than {limit} operators")]
    TooDeep { limit: usize },

    /// Assembly finished with other than exactly one node.
    #[error("tree assembly left {pending} nodes on the stack")]
    Unassembled { pending: usize },
}

fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| format!("'{}'", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Any failure of [`Parser::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
}

/// Coarse classification of a [`ParseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Input,
    Syntax,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Input => f.write_str("input"),
            ErrorKind::Syntax => f.write_str("syntax"),
        }
    }
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Input(_) => ErrorKind::Input,
            ParseError::Syntax(_) => ErrorKind::Syntax,
        }
    }
}

/// Node stack shared by the grammar productions while a tree is built.
///
/// Owns the arena every pushed node lives in; `pending` holds the ids that
/// have not been attached to a parent yet.
#[derive(Debug, Default)]
pub(crate) struct AssemblyStack {
    arena: Vec<SyntaxNode>,
    pending: Vec<NodeId>,
}

impl AssemblyStack {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Number of unattached nodes.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.pending.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Token texts of the unattached nodes, bottom first.
    #[cfg(test)]
    pub(crate) fn pending_texts(&self) -> Vec<String> {
        self.pending
            .iter()
            .map(|&id| self.arena[id].to_string())
            .collect()
    }

    pub(crate) fn push(&mut self, kind: NodeKind, token: Token) {
        let id = self.arena.len();
        self.arena.push(SyntaxNode::new(kind, Some(token)));
        self.pending.push(id);
    }

    /// Fold the top three nodes into one if more than two are pending.
    pub(crate) fn reduce(&mut self) {
        if self.pending.len() <= 2 {
            return;
        }
        let (Some(a), Some(op), Some(b)) =
            (self.pending.pop(), self.pending.pop(), self.pending.pop())
        else {
            return;
        };

        self.arena[op].left_child = Some(a);
        self.arena[op].right_child = Some(b);
        self.arena[a].parent = Some(op);
        self.arena[b].parent = Some(op);
        self.pending.push(op);

        trace!(
            op = %self.arena[op],
            left = %self.arena[a],
            right = %self.arena[b],
            "reduced operator node"
        );
    }

    /// Take the single remaining node as the root of a tree.
    pub(crate) fn into_tree(mut self) -> Result<SyntaxTree, SyntaxError> {
        match (self.pending.pop(), self.pending.len()) {
            (Some(root), 0) => Ok(SyntaxTree::new(self.arena, root)),
            (root, rest) => Err(SyntaxError::Unassembled {
                pending: rest + usize::from(root.is_some()),
            }),
        }
    }
}

/// Predictive parser for one-line arithmetic expressions.
///
/// Remembers the last expression and its tokens for inspection; nothing else
/// carries over between calls to [`Parser::parse`].
#[derive(Debug, Default)]
pub struct Parser {
    expression: String,
    tokens: Vec<Token>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently parsed expression, as given.
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Tokens of the most recently parsed expression.
    ///
    /// Empty when that expression failed to tokenize.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Parse `expression` into a syntax tree.
    pub fn parse(&mut self, expression: &str) -> Result<SyntaxTree, ParseError> {
        self.expression = expression.to_string();
        self.tokens.clear();

        let result = self.parse_current();
        match &result {
            Ok(tree) => debug!(
                expression,
                nodes = tree.len(),
                prefix = %tree,
                "parsed expression"
            ),
            Err(e) => debug!(expression, error = %e, "rejected expression"),
        }
        result
    }

    fn parse_current(&mut self) -> Result<SyntaxTree, ParseError> {
        self.tokens = Tokenizer::new(&self.expression).tokenize()?;

        let (rest, stack) = grammar::expr(&self.tokens, AssemblyStack::new())?;
        if !rest.is_empty() {
            return Err(SyntaxError::Leftover {
                tokens: rest.to_vec(),
            }
            .into());
        }

        Ok(stack.into_tree()?)
    }
}
