use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

use super::ast::NodeType;

/// Expression
///
/// Children are owned exclusively by their parent, the tree has no sharing.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Identifier(IdentifierExpr),
    Binary(BinaryExpr),
}

impl Expr {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Expr::Number(_) => NodeType::NumberLiteral,
            Expr::Identifier(_) => NodeType::Identifier,
            Expr::Binary(_) => NodeType::BinaryExpression,
        }
    }

    pub fn number(value: f64) -> Self {
        Expr::Number(NumberExpr { value })
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier(IdentifierExpr { name: name.into() })
    }

    pub fn binary(operator: BinaryOperator, left: Expr, right: Expr) -> Self {
        Expr::Binary(BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}

// LITERALS

/// Number Expression
/// Numeric value converted from the token text.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: f64,
}

/// Identifier Expression
/// Raw text of an `Ident` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierExpr {
    pub name: String,
}

// COMPLEX

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    /// Maps an operator token kind to its operator, `None` for anything else.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Add),
            TokenKind::Minus => Some(BinaryOperator::Subtract),
            TokenKind::Mul => Some(BinaryOperator::Multiply),
            TokenKind::Div => Some(BinaryOperator::Divide),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Binary Expression
/// An arithmetic operation between two sub-expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub operator: BinaryOperator,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}
