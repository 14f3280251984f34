use super::token::{Token, TokenKind};

/// Scanner for tagscript source text
///
/// Scans strictly left to right with a two-character window (current and
/// next). Scanning is total: unrecognized characters are discarded, an
/// unterminated string or comment absorbs the rest of the input, and no
/// input can make the scanner fail.
pub struct Scanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
}

/// Tokenizes source text into an ordered token sequence
///
/// Convenience wrapper over [`Scanner`]; never fails.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).scan_tokens()
}

/// Letters, `_` and `-` start or continue a word. `-` as a word
/// continuation means `foo-bar` scans as one identifier and a leading
/// minus never attaches to a number.
fn is_alpha(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '-'
}

fn is_numeric(c: char) -> bool {
    c.is_ascii_digit()
}

/// A word is a number when it begins with a digit and parses as one.
/// The digit guard keeps words like `inf` and `NaN`, which Rust's float
/// parser accepts, classified as identifiers.
fn is_number_word(word: &str) -> bool {
    word.starts_with(|c: char| c.is_ascii_digit()) && word.parse::<f64>().is_ok()
}

impl Scanner {
    /// Creates a new scanner from source code
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
        }
    }

    /// Scans all tokens from source code and returns them in source order
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        std::mem::take(&mut self.tokens)
    }

    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            // Whitespace (ignore)
            c if c.is_whitespace() => {}

            '<' => {
                if self.match_char('/') {
                    self.add_token(TokenKind::EndBracket);
                } else {
                    self.add_token(TokenKind::OpenBracket);
                }
            }
            '>' => self.add_token(TokenKind::CloseBracket),

            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else if self.match_char('>') {
                    self.add_token(TokenKind::SelfClosingTag);
                } else if is_alpha(self.peek()) || is_numeric(self.peek()) {
                    // Division, as in `4/2`
                    self.add_token(TokenKind::BinaryOperator);
                } else {
                    // Stray slash, not a comment, tag marker, or division
                    tracing::trace!("discarding stray '/'");
                }
            }

            '(' => self.add_token(TokenKind::OpenParen),
            ')' => self.add_token(TokenKind::CloseParen),
            '{' => self.add_token(TokenKind::OpenBrace),
            '}' => self.add_token(TokenKind::CloseBrace),

            '+' | '-' | '*' => self.add_token(TokenKind::BinaryOperator),
            '=' => self.add_token(TokenKind::Equals),

            '"' | '\'' => self.scan_string(c),

            c if is_numeric(c) || is_alpha(c) => self.scan_word(),

            _ => {
                tracing::trace!("discarding unrecognized character {:?}", c);
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    /// Consumes a string literal delimited by `quote`
    ///
    /// Content is taken verbatim with no escape processing, so the literal
    /// ends at the first matching quote character. An unterminated literal
    /// absorbs the rest of the input. The delimiting quotes are excluded
    /// from the lexeme.
    fn scan_string(&mut self, quote: char) {
        let mut value = String::new();

        while !self.is_at_end() && self.peek() != quote {
            value.push(self.advance());
        }

        if self.is_at_end() {
            tracing::trace!("unterminated string literal absorbed to end of input");
        } else {
            self.advance(); // Closing quote
        }

        self.tokens.push(Token::new(TokenKind::StringLiteral, value));
    }

    /// Consumes a maximal run of word characters and classifies it as a
    /// number, a keyword, or an identifier
    fn scan_word(&mut self) {
        while is_alpha(self.peek()) || is_numeric(self.peek()) {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();

        let kind = if is_number_word(&text) {
            TokenKind::Number
        } else {
            TokenKind::keyword(&text).unwrap_or(TokenKind::Identifier)
        };

        self.add_token(kind);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.current += 1;
            true
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens.push(Token::new(kind, lexeme));
    }
}
