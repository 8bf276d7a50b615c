use tracing::trace;

use crate::{
    ast::expressions::{BinaryOperator, Expr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{MAX_EXPRESSION_DEPTH, PRECEDENCE_TIERS},
    splitter::split_by_top_level_operator,
};

/// Parses a token range into a single expression.
///
/// Rules are tried in order, first match wins:
/// 1. a lone `Number` or `Ident` token
/// 2. a range wrapped in one matching pair of parentheses
/// 3. a binary expression, when any arithmetic operator is present
pub fn parse_expr(tokens: &[Token]) -> Result<Expr, Error> {
    parse_expr_at_depth(tokens, 0)
}

/// Splits at the outermost operator of the loosest binding tier that has one
/// at top level, then parses both sides.
///
/// Only parentheses count towards `MAX_EXPRESSION_DEPTH`, operands of a
/// binary expression are parsed at the depth of the expression itself.
pub fn parse_binary_expr(tokens: &[Token]) -> Result<Expr, Error> {
    parse_binary_expr_at_depth(tokens, 0)
}

fn parse_expr_at_depth(tokens: &[Token], depth: usize) -> Result<Expr, Error> {
    if depth > MAX_EXPRESSION_DEPTH {
        return Err(Error::new(
            ErrorImpl::NestingTooDeep {
                limit: MAX_EXPRESSION_DEPTH,
            },
            tokens.to_vec(),
        ));
    }

    if let [token] = tokens {
        if token.is_literal() {
            return parse_primary_expr(token);
        }
    }

    if is_fully_parenthesized(tokens) {
        trace!(depth, "stripping outer parentheses");
        return parse_expr_at_depth(&tokens[1..tokens.len() - 1], depth + 1);
    }

    if tokens.iter().any(|token| token.kind.is_arithmetic_operator()) {
        return parse_binary_expr_at_depth(tokens, depth);
    }

    let message = if tokens.is_empty() {
        "expected an operand, found nothing"
    } else {
        "expected a number, identifier, parenthesized group or arithmetic operation"
    };
    Err(invalid_expression(tokens, message))
}

fn parse_binary_expr_at_depth(tokens: &[Token], depth: usize) -> Result<Expr, Error> {
    for binding_power in PRECEDENCE_TIERS {
        let operators = binding_power.operators();

        // Peel same-tier operators off the right end, rightmost first, then
        // fold them back onto the leftmost operand. A flat chain costs no
        // recursion and still groups to the left.
        let mut tail = vec![];
        let mut rest = tokens;
        while let Some(split) = split_by_top_level_operator(rest, operators) {
            let operator = BinaryOperator::from_token_kind(split.operator.kind)
                .ok_or_else(|| invalid_expression(tokens, "expected an arithmetic operator"))?;
            tail.push((operator, split.right));
            rest = split.left;
        }

        if tail.is_empty() {
            continue;
        }

        trace!(?binding_power, operators = tail.len(), depth, "binary split");

        let mut expr = parse_expr_at_depth(rest, depth)?;
        for (operator, right) in tail.into_iter().rev() {
            let right = parse_expr_at_depth(right, depth)?;
            expr = Expr::binary(operator, expr, right);
        }

        return Ok(expr);
    }

    Err(invalid_expression(tokens, "no arithmetic operator at top level"))
}

pub fn parse_primary_expr(token: &Token) -> Result<Expr, Error> {
    match token.kind {
        TokenKind::Number => match token.value.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(Expr::number(value)),
            _ => Err(Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                vec![token.clone()],
            )),
        },
        TokenKind::Ident => Ok(Expr::identifier(token.value.clone())),
        _ => Err(invalid_expression(
            std::slice::from_ref(token),
            "expected a number or identifier",
        )),
    }
}

/// Whether the first and last tokens are a matching pair of parentheses.
///
/// Depth is tracked left to right and may only return to zero at the last
/// token, so `(a) + (b)` is not fully parenthesized. Unbalanced input is
/// never fully parenthesized.
pub fn is_fully_parenthesized(tokens: &[Token]) -> bool {
    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return false;
    };

    if tokens.len() < 2 || first.kind != TokenKind::LParen || last.kind != TokenKind::RParen {
        return false;
    }

    let mut depth: i32 = 0;
    for (index, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => depth -= 1,
            _ => {}
        }

        if depth == 0 && index < tokens.len() - 1 {
            return false;
        }
    }

    depth == 0
}

fn invalid_expression(tokens: &[Token], message: &str) -> Error {
    Error::new(
        ErrorImpl::InvalidExpression {
            message: String::from(message),
        },
        tokens.to_vec(),
    )
}
