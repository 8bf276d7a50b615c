//! Program entry point.
//!
//! The parser keeps no state between calls: every function works on an
//! immutable token slice and builds the tree bottom-up.

use tracing::debug;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{splitter::split_tokens, stmt::parse_stmt};

/// Parses a whole token sequence into a Program.
///
/// The input is split on `;` and each chunk must be a valid statement.
/// The first failure aborts the parse, no partial tree is returned.
///
/// # Returns
///
/// The Program with statements in source order, or the first Error raised.
pub fn parse_program(tokens: &[Token]) -> Result<Program, Error> {
    if tokens.is_empty() {
        return Err(Error::new(
            ErrorImpl::InvalidStatement {
                message: String::from("expected at least one statement"),
            },
            vec![],
        ));
    }

    let mut body = vec![];

    for chunk in split_tokens(tokens, TokenKind::Semicolon, None) {
        body.push(parse_stmt(chunk)?);
    }

    debug!(tokens = tokens.len(), statements = body.len(), "parsed program");
    Ok(Program { body })
}
