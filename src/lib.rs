//! # tagscript - lexer for an XML-tag-flavored scripting language
//!
//! Converts raw tagscript source text into a flat sequence of classified
//! tokens, ready for a parser to consume.
//!
//! The scanner reads strictly left to right with one character of
//! lookahead and never fails: unrecognized characters are dropped, an
//! unterminated string or comment absorbs the rest of the input, and
//! every other character lands in exactly one token.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagscript::{tokenize, TokenKind};
//!
//! let source = r#"<let name="count" type="number">5</let>"#;
//! let tokens = tokenize(source);
//!
//! assert_eq!(tokens[0].kind, TokenKind::OpenBracket);
//! assert_eq!(tokens[1].kind, TokenKind::Let);
//! assert_eq!(tokens[1].lexeme, "let");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source Code → Scanner → Tokens → (future parser)
//! ```
//!
//! - [`Scanner`] - Tokenizes source code into tokens
//! - [`Token`] - A classified lexeme
//! - [`TokenKind`] - The closed set of lexical categories
//!
//! Comments (`// ...`) and whitespace are skipped. Keywords such as `let`,
//! `while`, or `condition` get dedicated token kinds; everything else
//! word-shaped is a [`TokenKind::Identifier`] or a [`TokenKind::Number`].

/// Version of the tagscript lexer
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod lexer;

// Re-export main types
pub use error::{Error, Result};
pub use lexer::{tokenize, Scanner, Token, TokenKind};
