//! Parser module for building the Abstract Syntax Tree (AST).
//!
//! Instead of walking the tokens with a cursor, the parser works on whole
//! token ranges and recursively divides them:
//!
//! - the program is split into statements on `;`
//! - a statement is dispatched on its leading `let` / `print` keyword
//! - an expression is a literal, a parenthesized group, or is split at its
//!   rightmost top-level operator of the loosest binding tier
//!
//! Splitting at the rightmost operator makes same-tier operators group to
//! the left, and searching the additive tier first makes `*` and `/` bind
//! tighter than `+` and `-`.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod splitter;
pub mod stmt;
