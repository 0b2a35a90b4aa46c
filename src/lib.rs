//! # Introduction
//!
//! prefixer parses one-line arithmetic expressions over integers and
//! single-letter identifiers and prints them in prefix (Polish) notation.
//!
//! ## Pipeline
//!
//! ```text
//! Line → Tokenizer → Tokens → Parser (grammar + assembly stack) → SyntaxTree → prefix string
//! ```
//!
//! 1. [`parser`]: tokenises the line, runs the predictive parser, and owns the
//!    [`parser::SyntaxTree`] with its node, right, left traversal.
//! 2. [`batch`]: file-to-file driver writing one result per input line, with
//!    `incorrect syntax` for lines that fail.
//! 3. [`ui`]: ratatui-based interactive front-end; not part of the stable
//!    library API.
//! 4. [`logging`]: tracing subscriber setup.
//!
//! ```
//! assert_eq!(prefixer::parser::to_prefix("a + 35 - b").unwrap(), "-+a35b");
//! assert_eq!(prefixer::parser::to_prefix("x-2*y").unwrap(), "-x*2y");
//! ```

pub mod batch;
pub mod logging;
pub mod parser;
pub mod ui;
