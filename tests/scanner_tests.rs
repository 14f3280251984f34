//! Integration tests for the tagscript scanner

use tagscript::{tokenize, Token, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).iter().map(|t| t.kind).collect()
}

// ====================
// Tag markers
// ====================

#[test]
fn test_end_bracket_alone() {
    let tokens = tokenize("</");
    assert_eq!(tokens, vec![Token::new(TokenKind::EndBracket, "</")]);
}

#[test]
fn test_open_bracket_alone() {
    let tokens = tokenize("<");
    assert_eq!(tokens, vec![Token::new(TokenKind::OpenBracket, "<")]);
}

#[test]
fn test_self_closing_tag() {
    let tokens = tokenize("/>");
    assert_eq!(tokens, vec![Token::new(TokenKind::SelfClosingTag, "/>")]);
}

#[test]
fn test_full_element() {
    assert_eq!(
        kinds(r#"<let name="x">5</let>"#),
        vec![
            TokenKind::OpenBracket,
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::StringLiteral,
            TokenKind::CloseBracket,
            TokenKind::Number,
            TokenKind::EndBracket,
            TokenKind::Let,
            TokenKind::CloseBracket,
        ]
    );
}

// ====================
// Keywords vs identifiers
// ====================

#[test]
fn test_keyword_precedence() {
    let tokens = tokenize("let");
    assert_eq!(tokens, vec![Token::new(TokenKind::Let, "let")]);
}

#[test]
fn test_maximal_munch_beats_keyword_prefix() {
    let tokens = tokenize("letx");
    assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "letx")]);
}

#[test]
fn test_all_keywords_scan_to_keyword_kinds() {
    let source = "let const args arg return counter type while for if elseIf else from to condition";
    let expected = vec![
        TokenKind::Let,
        TokenKind::Const,
        TokenKind::Args,
        TokenKind::Arg,
        TokenKind::Return,
        TokenKind::Counter,
        TokenKind::Type,
        TokenKind::While,
        TokenKind::For,
        TokenKind::If,
        TokenKind::ElseIf,
        TokenKind::Else,
        TokenKind::From,
        TokenKind::To,
        TokenKind::Condition,
    ];
    assert_eq!(kinds(source), expected);
}

#[test]
fn test_name_scans_as_identifier() {
    // `TokenKind::Name` is reserved for the parser and never emitted.
    let tokens = tokenize("name");
    assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "name")]);
}

// ====================
// Numbers
// ====================

#[test]
fn test_number() {
    let tokens = tokenize("42");
    assert_eq!(tokens, vec![Token::new(TokenKind::Number, "42")]);
}

#[test]
fn test_digits_then_letters_is_an_identifier() {
    let tokens = tokenize("42abc");
    assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "42abc")]);
}

#[test]
fn test_identifier_with_trailing_digits() {
    let tokens = tokenize("x2");
    assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "x2")]);
}

// ====================
// Comments
// ====================

#[test]
fn test_comment_elision() {
    let tokens = tokenize("a // b\nc");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Identifier, "a"),
            Token::new(TokenKind::Identifier, "c"),
        ]
    );
}

#[test]
fn test_comment_absorbs_to_end_of_input() {
    assert!(tokenize("// unterminated").is_empty());
}

// ====================
// String literals
// ====================

#[test]
fn test_string_literal_strips_quotes() {
    let tokens = tokenize(r#""hello""#);
    assert_eq!(tokens, vec![Token::new(TokenKind::StringLiteral, "hello")]);
}

#[test]
fn test_string_literal_no_escapes() {
    // The literal terminates at the first embedded quote character.
    let tokens = tokenize("\"a\\\"b\"");
    assert_eq!(tokens[0], Token::new(TokenKind::StringLiteral, "a\\"));
}

#[test]
fn test_mixed_quote_styles_do_not_terminate_each_other() {
    let tokens = tokenize(r#"'she said "hi"'"#);
    assert_eq!(
        tokens,
        vec![Token::new(TokenKind::StringLiteral, r#"she said "hi""#)]
    );
}

// ====================
// Slash disambiguation
// ====================

#[test]
fn test_self_closing_vs_division() {
    assert_eq!(kinds("/>"), vec![TokenKind::SelfClosingTag]);

    // A lone slash before whitespace is discarded
    let tokens = tokenize("/ >");
    assert_eq!(tokens, vec![Token::new(TokenKind::CloseBracket, ">")]);

    let tokens = tokenize("4/2");
    assert_eq!(
        tokens,
        vec![
            Token::new(TokenKind::Number, "4"),
            Token::new(TokenKind::BinaryOperator, "/"),
            Token::new(TokenKind::Number, "2"),
        ]
    );
}

// ====================
// Whitespace handling
// ====================

#[test]
fn test_surrounding_whitespace_is_irrelevant() {
    assert_eq!(tokenize("  let  "), tokenize("let"));
    assert_eq!(tokenize("\t<x>\r\n"), tokenize("<x>"));
}

// ====================
// Lenient scanning
// ====================

#[test]
fn test_arbitrary_junk_never_fails() {
    let tokens = tokenize("@@@ ??? ;;; %%%");
    assert!(tokens.is_empty());
}

#[test]
fn test_token_count_bounded_by_input_length() {
    let source = r#"<while condition="x"><counter from="0" to="9" /></while>"#;
    let tokens = tokenize(source);
    assert!(tokens.len() <= source.chars().count());
}
