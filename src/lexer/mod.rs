//! Lexical analysis for tagscript
//!
//! Converts source text into a flat stream of classified tokens. Scanning
//! is lenient by contract: it never fails, and characters that fit no
//! token class are silently dropped.

mod scanner;
mod token;

pub use scanner::{tokenize, Scanner};
pub use token::{Token, TokenKind};
