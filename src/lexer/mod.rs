//! Lexical analysis for arithmetic expressions.
//!
//! This module converts source text into a flat sequence of tokens. It handles:
//!
//! - Integer and float literals
//! - The four arithmetic operators and parentheses
//! - Position tracking for error reporting

pub mod lexer;
pub mod tokens;
