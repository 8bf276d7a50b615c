use crate::{
    ast::{
        expressions::IdentifierExpr,
        statements::{LetStmt, PrintStmt, Stmt},
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::parse_expr, lookups::STMT_LOOKUP, splitter::split_tokens};

/// Parses one semicolon-delimited chunk, dispatching on its leading keyword.
pub fn parse_stmt(tokens: &[Token]) -> Result<Stmt, Error> {
    let Some(first) = tokens.first() else {
        return Err(invalid_statement(tokens, "found an empty statement"));
    };

    match STMT_LOOKUP.get(&first.kind) {
        Some(handler) => handler(tokens),
        None => Err(invalid_statement(
            tokens,
            &format!("expected `let` or `print`, found `{}`", first.value),
        )),
    }
}

pub fn parse_let_stmt(tokens: &[Token]) -> Result<Stmt, Error> {
    let name = match tokens.get(1) {
        Some(token) if token.kind == TokenKind::Ident => IdentifierExpr {
            name: token.value.clone(),
        },
        _ => return Err(invalid_statement(tokens, "expected identifier after `let`")),
    };

    // Bounded to two chunks so an `=` inside the value is left alone.
    let chunks = split_tokens(&tokens[1..], TokenKind::Equal, Some(2));
    if chunks.len() != 2 {
        return Err(invalid_statement(tokens, "expected `=` followed by a value"));
    }

    let value = parse_expr(chunks[1])?;

    Ok(Stmt::Let(LetStmt { name, value }))
}

pub fn parse_print_stmt(tokens: &[Token]) -> Result<Stmt, Error> {
    let value = parse_expr(tokens.get(1..).unwrap_or_default())?;

    Ok(Stmt::Print(PrintStmt { value }))
}

fn invalid_statement(tokens: &[Token], message: &str) -> Error {
    Error::new(
        ErrorImpl::InvalidStatement {
            message: String::from(message),
        },
        tokens.to_vec(),
    )
}
