//! Error types and error handling.
//!
//! Every failure aborts the whole tokenize or parse call. An error carries
//! its kind, a human readable tip and the token range it was raised on.

pub mod errors;

#[cfg(test)]
mod tests;
