use super::{
    ast::NodeType,
    expressions::{Expr, IdentifierExpr},
};

/// Statement
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Print(PrintStmt),
}

impl Stmt {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Stmt::Let(_) => NodeType::LetStatement,
            Stmt::Print(_) => NodeType::PrintStatement,
        }
    }
}

/// `let <name> = <value>`
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub name: IdentifierExpr,
    pub value: Expr,
}

/// `print <value>`
#[derive(Debug, Clone, PartialEq)]
pub struct PrintStmt {
    pub value: Expr,
}
