//! Token range partitioning.
//!
//! Both splitters only ever hand out sub-slices of their input, the
//! token sequence itself is never copied or mutated.

use tracing::trace;

use crate::lexer::tokens::{Token, TokenKind};

/// The result of splitting a range at one top-level operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TokenSplit<'a> {
    pub left: &'a [Token],
    pub operator: &'a Token,
    pub right: &'a [Token],
}

/// Splits `tokens` into chunks on every `delimiter`, dropping the delimiters.
///
/// With `max_chunks`, splitting stops once `max_chunks - 1` chunks are complete
/// and the rest of the input, delimiters included, becomes the final chunk.
/// An empty trailing chunk is never produced, empty chunks between two
/// delimiters are.
pub fn split_tokens(tokens: &[Token], delimiter: TokenKind, max_chunks: Option<usize>) -> Vec<&[Token]> {
    let mut chunks = vec![];
    let mut start = 0;

    for (index, token) in tokens.iter().enumerate() {
        if max_chunks.is_some_and(|max| chunks.len() + 1 >= max) {
            break;
        }

        if token.kind == delimiter {
            chunks.push(&tokens[start..index]);
            start = index + 1;
        }
    }

    if start < tokens.len() {
        chunks.push(&tokens[start..]);
    }

    trace!(%delimiter, chunks = chunks.len(), "split tokens");
    chunks
}

/// Finds the rightmost operator in `operators` that sits outside every
/// parenthesized group and splits the range around it.
///
/// The scan runs right to left, so a `)` is met before its matching `(`:
/// `)` increases the depth and `(` decreases it. Only depth zero is
/// top level. Unbalanced parentheses push the depth away from zero and
/// simply stop matching, they are not reported here.
pub fn split_by_top_level_operator<'a>(tokens: &'a [Token], operators: &[TokenKind]) -> Option<TokenSplit<'a>> {
    let mut depth: i32 = 0;

    for (index, token) in tokens.iter().enumerate().rev() {
        match token.kind {
            TokenKind::RParen => depth += 1,
            TokenKind::LParen => depth -= 1,
            kind if depth == 0 && operators.contains(&kind) => {
                trace!(operator = %kind, index, "found top-level operator");
                return Some(TokenSplit {
                    left: &tokens[..index],
                    operator: token,
                    right: &tokens[index + 1..],
                });
            }
            _ => {}
        }
    }

    None
}
