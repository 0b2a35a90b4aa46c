//! Lexer (tokenizer) for one-line arithmetic expressions
//!
//! Converts a raw expression line into a flat [`Token`] stream consumed by the
//! parser. Whitespace anywhere in the line is insignificant and is removed
//! before scanning.

use std::fmt;
use thiserror::Error;

/// Lexical class of a [`Token`], derived from its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Number,
    Id,
    Op,
    Undefined,
}

impl TokenType {
    /// Classify a lexeme by its first character.
    ///
    /// An empty lexeme is `Undefined`; the tokenizer never produces one.
    pub fn classify(lexeme: &str) -> Self {
        match lexeme.chars().next() {
            Some(c) if c.is_ascii_digit() => TokenType::Number,
            Some(c) if c.is_ascii_alphabetic() => TokenType::Id,
            Some(c) if Operator::from_char(c).is_some() => TokenType::Op,
            _ => TokenType::Undefined,
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Number => "number",
            TokenType::Id => "id",
            TokenType::Op => "op",
            TokenType::Undefined => "undefined",
        };
        f.write_str(name)
    }
}

/// The four operator symbols the grammar matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,  // +
    Minus, // -
    Star,  // *
    Slash, // /
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Star),
            '/' => Some(Operator::Slash),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Star => "*",
            Operator::Slash => "/",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}'", self.as_str())
    }
}

/// A single lexeme together with its [`TokenType`].
///
/// Equality is by text only; the type is a pure function of the text anyway.
#[derive(Debug, Clone, Eq)]
pub struct Token {
    text: String,
    token_type: TokenType,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let token_type = TokenType::classify(&text);
        Token { text, token_type }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// `number` and `op` tokens are grammar terminals.
    pub fn is_terminal(&self) -> bool {
        matches!(self.token_type, TokenType::Number | TokenType::Op)
    }

    /// Whether this token spells the given operator.
    pub fn is_operator(&self, op: Operator) -> bool {
        self.text == op.as_str()
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Raised when the scan could not account for every character of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported character {found:?} at column {column} in {input:?}")]
pub struct InputError {
    /// The input after whitespace removal.
    pub input: String,
    /// Concatenation of the token texts that were recognised.
    pub recognised: String,
    /// First character the scan skipped.
    pub found: char,
    /// 0-based position of `found` in `input`.
    pub column: usize,
}

/// Splits an expression line into tokens.
pub struct Tokenizer {
    input: Vec<char>,
    position: usize,
}

impl Tokenizer {
    pub fn new(source: &str) -> Self {
        Tokenizer {
            input: source.chars().filter(|c| !c.is_whitespace()).collect(),
            position: 0,
        }
    }

    /// Tokenize the entire input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, InputError> {
        let mut tokens = Vec::new();
        let mut skipped: Option<(usize, char)> = None;

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                tokens.push(Token::new(self.lex_number()));
            } else if ch.is_ascii_alphabetic() || Operator::from_char(ch).is_some() {
                self.advance();
                tokens.push(Token::new(ch));
            } else {
                // Unmatched characters are dropped here and caught below
                if skipped.is_none() {
                    skipped = Some((self.position, ch));
                }
                self.advance();
            }
        }

        let input: String = self.input.iter().collect();
        let recognised: String = tokens.iter().map(Token::text).collect();
        if recognised != input {
            let (column, found) = skipped.unwrap_or_default();
            return Err(InputError {
                input,
                recognised,
                found,
                column,
            });
        }

        tracing::trace!(count = tokens.len(), input = %input, "tokenized expression");
        Ok(tokens)
    }

    /// Lex a maximal run of decimal digits.
    fn lex_number(&mut self) -> String {
        let mut digits = String::new();
        while let Some(ch) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            digits.push(ch);
            self.advance();
        }
        digits
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }
}

/// Tokenize `source` in one call.
pub fn tokenize(source: &str) -> Result<Vec<Token>, InputError> {
    Tokenizer::new(source).tokenize()
}
