/// AST (Abstract Syntax Tree) module
///
/// Submodules:
/// - ast: Program root and node discriminators
/// - expressions: Number, identifier and binary expressions
/// - statements: Let and print statements
pub mod ast;
pub mod expressions;
pub mod statements;
