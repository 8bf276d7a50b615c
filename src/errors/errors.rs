use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::Token;

/// A parse or tokenize failure together with the token range it was raised on.
#[derive(Error, Debug, Clone)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    tokens: Vec<Token>,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, tokens: Vec<Token>) -> Self {
        Error {
            internal_error: error_impl,
            tokens,
        }
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// The offending token range. Empty for tokenizer errors.
    pub fn get_tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::InvalidStatement { .. } => "InvalidStatement",
            ErrorImpl::InvalidExpression { .. } => "InvalidExpression",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::InvalidStatement { message } => ErrorTip::Suggestion(format!(
                "Invalid statement, {}",
                message
            )),
            ErrorImpl::InvalidExpression { message } => ErrorTip::Suggestion(format!(
                "Invalid expression, {}",
                message
            )),
            ErrorImpl::NumberParseError { token } => {
                ErrorTip::Suggestion(format!("Invalid number: `{}`", token))
            }
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Expression nesting exceeds the limit of {}",
                limit
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("invalid statement: {message}")]
    InvalidStatement { message: String },
    #[error("invalid expression: {message}")]
    InvalidExpression { message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("expression nesting deeper than {limit}")]
    NestingTooDeep { limit: usize },
}
