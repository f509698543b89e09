//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Reading the input one numbered line at a time
//! - Matching lexemes with a single anchored regex pattern
//! - Recognition of identifiers, integer and string literals, and operators
//! - A lookahead queue serving `read` and `peek`
//! - Comments and whitespace handling

pub mod lexer;
pub mod line_reader;
pub mod pattern;
pub mod tokens;
