//! Lexical analysis module.
//!
//! The parser only needs a finished token sequence. This module provides
//! the token model it consumes and a reference tokenizer that produces it:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of the `let` / `print` keywords, identifiers and numbers
//! - Arithmetic operators, `=`, `;` and parentheses
//! - Whitespace and `//` comment skipping

pub mod lexer;
pub mod tokens;
