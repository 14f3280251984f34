use serde::{Deserialize, Serialize};

/// A single token from the source code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The lexical category of the token
    pub kind: TokenKind,
    /// Original text of the token (quotes stripped for string literals)
    pub lexeme: String,
}

impl Token {
    /// Creates a new token with the given kind and lexeme
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

/// All possible token types in tagscript
///
/// The set is closed: a future parser consumes exactly these categories.
/// Several variants are reserved for that parser and never produced by the
/// scanner (see the variant docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    // Literals
    /// Numeric literal
    Number,
    /// String literal, single- or double-quoted, no escape processing
    StringLiteral,

    // Identifiers
    /// Identifier (any word that is neither a number nor a keyword)
    Identifier,

    // Keywords
    /// `let` keyword
    Let,
    /// `const` keyword
    Const,
    /// `args` keyword
    Args,
    /// `arg` keyword
    Arg,
    /// `return` keyword
    Return,
    /// `counter` keyword
    Counter,
    /// `type` keyword
    Type,
    /// `while` keyword
    While,
    /// `for` keyword
    For,
    /// `if` keyword
    If,
    /// `elseIf` keyword
    ElseIf,
    /// `else` keyword
    Else,
    /// `from` keyword
    From,
    /// `to` keyword
    To,
    /// `condition` keyword
    Condition,

    // Tag markers
    /// Opening bracket (<)
    OpenBracket,
    /// Closing bracket (>)
    CloseBracket,
    /// Closing tag marker (</)
    EndBracket,
    /// Self-closing tag marker (/>)
    SelfClosingTag,

    // Operators
    /// Binary arithmetic operator (+ - * /)
    BinaryOperator,
    /// Assignment operator (=)
    Equals,

    // Delimiters
    /// Left parenthesis (
    OpenParen,
    /// Right parenthesis )
    CloseParen,
    /// Left brace {
    OpenBrace,
    /// Right brace }
    CloseBrace,

    // Reserved - declared for the parser, never emitted by the scanner
    /// Reserved: tag name position (the scanner emits `Identifier` instead)
    Name,
    /// Reserved: comment text (comments are skipped, not emitted)
    Comment,
    /// Reserved: template string opening delimiter
    StartTemplateString,
    /// Reserved: template string closing delimiter
    EndTemplateString,
    /// Reserved: interpolation opening delimiter
    StartInterpolation,
    /// Reserved: interpolation closing delimiter
    EndInterpolation,
}

impl TokenKind {
    /// Check if token is a keyword
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::Let
                | TokenKind::Const
                | TokenKind::Args
                | TokenKind::Arg
                | TokenKind::Return
                | TokenKind::Counter
                | TokenKind::Type
                | TokenKind::While
                | TokenKind::For
                | TokenKind::If
                | TokenKind::ElseIf
                | TokenKind::Else
                | TokenKind::From
                | TokenKind::To
                | TokenKind::Condition
        )
    }

    /// Get keyword kind from a word, if the word is reserved
    ///
    /// The match arms are the single source of truth for the reserved-word
    /// table: every entry names its variant directly, so the table and the
    /// enumeration cannot drift apart.
    pub fn keyword(s: &str) -> Option<TokenKind> {
        match s {
            "let" => Some(TokenKind::Let),
            "const" => Some(TokenKind::Const),
            "args" => Some(TokenKind::Args),
            "arg" => Some(TokenKind::Arg),
            "return" => Some(TokenKind::Return),
            "counter" => Some(TokenKind::Counter),
            "type" => Some(TokenKind::Type),
            "while" => Some(TokenKind::While),
            "for" => Some(TokenKind::For),
            "if" => Some(TokenKind::If),
            "elseIf" => Some(TokenKind::ElseIf),
            "else" => Some(TokenKind::Else),
            "from" => Some(TokenKind::From),
            "to" => Some(TokenKind::To),
            "condition" => Some(TokenKind::Condition),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
