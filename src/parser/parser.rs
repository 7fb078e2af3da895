//! Recursive descent parser for the Python-subset grammar
//!
//! Consumes the token stream strictly left to right with one token of
//! lookahead and no backtracking:
//!
//! ```text
//! program        := statement*
//! statement      := function_def | call_statement
//! function_def   := 'def' IDENT '(' IDENT ')' ':' print_stmt?
//! print_stmt     := 'print' '(' STRING '+' IDENT ')'
//! call_statement := IDENT '(' STRING ')'
//! ```
//!
//! The first grammar violation aborts parsing; there is no error recovery.

use crate::parser::ast::{AstNode, Program, SourceLocation, Statement};
use crate::parser::lexer::{LexError, Lexer, Token, TokenKind};
use std::fmt;

/// Parser error type
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Syntax error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Recursive descent parser over a token stream
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    /// Tokenize the source and create a parser over the result.
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self::from_tokens(tokens))
    }

    /// Create a parser over an already-lexed token stream.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire program (top-level statements)
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Program::new();

        while !self.is_at_end() {
            let node = self.parse_top_level_statement()?;
            program.nodes.push(node);
        }

        Ok(program)
    }

    /// Dispatch on the current token: `def` starts a function definition, an
    /// identifier followed by `(` starts a call statement.
    fn parse_top_level_statement(&mut self) -> Result<AstNode, ParseError> {
        match self.peek() {
            Some(tok) if tok.kind == TokenKind::Def => self.parse_function_def(),
            Some(tok)
                if tok.kind == TokenKind::Identifier
                    && self.peek_ahead(1).map(|t| t.kind) == Some(TokenKind::LParen) =>
            {
                self.parse_call_statement()
            }
            Some(tok) => Err(ParseError {
                message: format!("Unsupported statement: found {}", tok),
                location: tok.location,
            }),
            None => Err(ParseError {
                message: "Unsupported statement: found end of input".to_string(),
                location: self.current_location(),
            }),
        }
    }

    fn parse_function_def(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();

        self.expect(TokenKind::Def)?;
        let name = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::LParen)?;
        let param = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::RParen)?;
        self.expect(TokenKind::Colon)?;

        // An empty body is legal: a print statement is parsed only when the
        // `print` keyword comes next.
        let mut body = Vec::new();
        if self.check(TokenKind::Print) {
            body.push(self.parse_print_statement()?);
        }

        Ok(AstNode::FunctionDef {
            name,
            param,
            body,
            location,
        })
    }

    fn parse_print_statement(&mut self) -> Result<Statement, ParseError> {
        let location = self.current_location();

        self.expect(TokenKind::Print)?;
        self.expect(TokenKind::LParen)?;
        let left = self.expect(TokenKind::StringLiteral)?;
        self.expect(TokenKind::Plus)?;
        let right = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::RParen)?;

        Ok(Statement::PrintConcat {
            left,
            right,
            location,
        })
    }

    fn parse_call_statement(&mut self) -> Result<AstNode, ParseError> {
        let location = self.current_location();

        let name = self.expect(TokenKind::Identifier)?;
        self.expect(TokenKind::LParen)?;
        let argument = self.expect(TokenKind::StringLiteral)?;
        self.expect(TokenKind::RParen)?;

        Ok(AstNode::Call {
            name,
            argument,
            location,
        })
    }

    // ===== Helper methods =====

    /// Consume the current token if it has the expected kind and return its
    /// text; otherwise fail with the expected kind and the actual token.
    fn expect(&mut self, kind: TokenKind) -> Result<String, ParseError> {
        match self.peek() {
            Some(tok) if tok.kind == kind => {
                let text = tok.text.clone();
                self.position += 1;
                Ok(text)
            }
            Some(tok) => Err(ParseError {
                message: format!("Expected {}, found {}", kind, tok),
                location: tok.location,
            }),
            None => Err(ParseError {
                message: format!("Expected {}, found end of input", kind),
                location: self.current_location(),
            }),
        }
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().map(|t| t.kind) == Some(kind)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Location of the current token, or of the last token when the cursor
    /// has run past the end of the stream.
    fn current_location(&self) -> SourceLocation {
        self.peek()
            .or_else(|| self.tokens.last())
            .map(|t| t.location)
            .unwrap_or_else(|| SourceLocation::new(1, 1))
    }
}
