//! # Introduction
//!
//! py2cpp translates a tiny fixed subset of Python into C++, exposing every
//! stage of the pipeline as an inspectable artifact: the token stream, the
//! syntax tree, a flat intermediate representation, and the generated C++
//! source.
//!
//! ## Translation pipeline
//!
//! ```text
//! Source → Lexer → Parser → AST → {IR Generator, C++ Generator}
//! ```
//!
//! 1. [`parser`] — tokenises the source and builds an AST.
//! 2. [`codegen::ir`] — walks the AST and emits three-address-style
//!    intermediate code, one instruction per line.
//! 3. [`codegen::cpp`] — walks the same AST and emits a compilable C++
//!    translation unit.
//!
//! The two generators are independent consumers of the same AST; neither
//! sees the other's output. [`translate`] runs the whole pipeline over one
//! source string and returns all four artifacts, or the first error raised
//! by the lexer or parser.
//!
//! ## Supported subset
//!
//! `def name(param):` with an optional `print(<string> + <identifier>)`
//! body, and top-level `name(<string>)` call statements. Nothing else.

use std::fmt;

pub mod codegen;
pub mod parser;

use codegen::cpp::generate_cpp;
use codegen::ir::generate_ir;
use parser::ast::Program;
use parser::lexer::{LexError, Lexer, Token};
use parser::parser::{ParseError, Parser};

/// All four artifacts of one successful translation request.
#[derive(Debug, Clone)]
pub struct Translation {
    pub tokens: Vec<Token>,
    pub program: Program,
    pub ir: String,
    pub cpp: String,
}

/// Top-level translation errors
#[derive(Debug, Clone)]
pub enum TranslateError {
    Lex(LexError),
    Parse(ParseError),
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Lex(e) => write!(f, "{}", e),
            TranslateError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for TranslateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranslateError::Lex(e) => Some(e),
            TranslateError::Parse(e) => Some(e),
        }
    }
}

impl From<LexError> for TranslateError {
    fn from(err: LexError) -> Self {
        TranslateError::Lex(err)
    }
}

impl From<ParseError> for TranslateError {
    fn from(err: ParseError) -> Self {
        TranslateError::Parse(err)
    }
}

/// Run the full pipeline over one source string.
///
/// Either all four artifacts are produced or none are: the first lexical or
/// syntax error aborts the request, and the generators only ever see a
/// successfully parsed program.
pub fn translate(source: &str) -> Result<Translation, TranslateError> {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize()?;

    let mut parser = Parser::from_tokens(tokens.clone());
    let program = parser.parse_program()?;

    let ir = generate_ir(&program);
    let cpp = generate_cpp(&program);

    Ok(Translation {
        tokens,
        program,
        ir,
        cpp,
    })
}
