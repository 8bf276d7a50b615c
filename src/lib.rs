#![allow(clippy::module_inception)]

use crate::{ast::ast::Program, errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse_program};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// Tokenizes and parses source text in one step.
pub fn parse_source(source: &str) -> Result<Program, Error> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}

#[cfg(test)]
mod tests {
    use crate::ast::{ast::NodeType, statements::Stmt};

    #[test]
    fn test_parse_source() {
        let program = super::parse_source("let x = 1 + 2; print x;").unwrap();

        assert_eq!(program.len(), 2);
        assert!(matches!(program.body[0], Stmt::Let(_)));
        assert_eq!(program.body[1].get_node_type(), NodeType::PrintStatement);
    }

    #[test]
    fn test_parse_source_reports_lexer_errors() {
        let error = super::parse_source("print 1 % 2;").unwrap_err();

        assert_eq!(error.get_error_name(), "UnrecognisedToken");
    }
}
