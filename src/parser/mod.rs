//! Python-subset source front end
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → AST)
//! - [`ast`]: AST node definitions
//!
//! # Supported subset
//!
//! The grammar is intentionally tiny:
//! - One function shape: `def name(param):` with an optional single
//!   `print(<string> + <identifier>)` body statement
//! - One call shape: `name(<string>)` at top level
//! - No expressions beyond the print concatenation, no control flow, no
//!   nested definitions or calls, no type checking
//!
//! # Parser implementation
//!
//! Hand-written recursive descent parser with one token of lookahead.
//! No external parser generator dependencies.

pub mod ast;
pub mod lexer;
pub mod parser;
