use super::statements::Stmt;

/// Node Types
///
/// The closed set of node discriminators the parser produces.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum NodeType {
    Program,
    LetStatement,
    PrintStatement,
    Identifier,
    NumberLiteral,
    BinaryExpression,
}

/// Program
///
/// Root of the tree. Statements are kept in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Stmt>,
}

impl Program {
    pub fn get_node_type(&self) -> NodeType {
        NodeType::Program
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}
