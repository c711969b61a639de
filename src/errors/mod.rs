//! Error types and error handling for the lexer.
//!
//! This module defines the lexical error value. It includes:
//!
//! - An error structure bounded by start and end positions
//! - The error kinds the scanner can raise
//! - Plain and caret-style rendering for front ends

pub mod errors;
