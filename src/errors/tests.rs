//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::lexer::tokens::{Token, TokenKind};

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        vec![],
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert!(error.get_tokens().is_empty());
}

#[test]
fn test_error_keeps_token_range() {
    let tokens = vec![
        Token::new(TokenKind::Number, "1"),
        Token::new(TokenKind::Number, "2"),
    ];
    let error = Error::new(
        ErrorImpl::InvalidExpression {
            message: "no rule matches".to_string(),
        },
        tokens.clone(),
    );

    assert_eq!(error.get_tokens(), tokens.as_slice());
}

#[test]
fn test_invalid_statement_error() {
    let error = Error::new(
        ErrorImpl::InvalidStatement {
            message: "empty statement".to_string(),
        },
        vec![],
    );

    assert_eq!(error.get_error_name(), "InvalidStatement");
    assert_eq!(error.to_string(), "invalid statement: empty statement");
}

#[test]
fn test_invalid_expression_error() {
    let error = Error::new(
        ErrorImpl::InvalidExpression {
            message: "no rule matches".to_string(),
        },
        vec![Token::new(TokenKind::LParen, "(")],
    );

    assert_eq!(error.get_error_name(), "InvalidExpression");
    assert_eq!(error.to_string(), "invalid expression: no rule matches");
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "1.2.3".to_string(),
        },
        vec![Token::new(TokenKind::Number, "1.2.3")],
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_tip().to_string(), "Invalid number: `1.2.3`");
}

#[test]
fn test_nesting_too_deep_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 4 }, vec![]);

    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "expression nesting deeper than 4");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        vec![],
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::InvalidStatement {
            message: "expected `let` or `print`".to_string(),
        },
        vec![Token::new(TokenKind::Number, "1")],
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => {
            assert_eq!(tip, "Invalid statement, expected `let` or `print`")
        }
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
