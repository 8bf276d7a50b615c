use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{ast::statements::Stmt, errors::errors::Error, lexer::tokens::{Token, TokenKind}};

use super::stmt::{parse_let_stmt, parse_print_stmt};

#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Additive,
    Multiplicative,
}

impl BindingPower {
    pub fn operators(&self) -> &'static [TokenKind] {
        match self {
            BindingPower::Additive => &[TokenKind::Plus, TokenKind::Minus],
            BindingPower::Multiplicative => &[TokenKind::Mul, TokenKind::Div],
        }
    }
}

/// Tiers in the order they are searched for the outermost operator.
/// The loosest-binding tier must come first.
pub const PRECEDENCE_TIERS: [BindingPower; 2] = [BindingPower::Additive, BindingPower::Multiplicative];

/// Deepest parenthesis nesting accepted before failing with `NestingTooDeep`.
pub const MAX_EXPRESSION_DEPTH: usize = 256;

pub type StmtHandler = fn(&[Token]) -> Result<Stmt, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;

lazy_static! {
    pub static ref STMT_LOOKUP: StmtLookup = {
        let mut map: StmtLookup = HashMap::new();
        map.insert(TokenKind::Let, parse_let_stmt);
        map.insert(TokenKind::Print, parse_print_stmt);
        map
    };
}
