//! Error types and error handling for the lexer.
//!
//! This module defines the error type raised while tokenizing. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for malformed tokens, oversized numbers and I/O
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
