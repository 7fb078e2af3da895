//! Lexer (tokenizer) for the Python-subset source language
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! parser. Whitespace and newlines are discarded; every other input
//! character must belong to exactly one token or lexing fails.

use super::ast::SourceLocation;
use rustc_hash::FxHashMap;
use std::fmt;

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Keywords
    Def,
    Print,

    // Literals
    StringLiteral,
    NumberLiteral,

    // Operators and punctuation
    Assign,
    LParen,
    RParen,
    Colon,
    Comma,
    Plus,

    // Names
    Identifier,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Def => "Keyword-Def",
            TokenKind::Print => "Keyword-Print",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::NumberLiteral => "NumberLiteral",
            TokenKind::Assign => "Assign",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::Colon => "Colon",
            TokenKind::Comma => "Comma",
            TokenKind::Plus => "Plus",
            TokenKind::Identifier => "Identifier",
        };
        write!(f, "{}", name)
    }
}

/// A classified lexical unit.
///
/// `text` is the exact matched substring; string literals keep their
/// enclosing quotes. Every token carries a [`SourceLocation`] so that parse
/// errors can report an accurate line and column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, '{}')", self.kind, self.text)
    }
}

/// Lexer error type
#[derive(Debug, Clone)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lexer error at line {}, column {}: {}",
            self.location.line, self.location.column, self.message
        )
    }
}

impl std::error::Error for LexError {}

/// Lexer for the Python-subset source language
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    keywords: FxHashMap<&'static str, TokenKind>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        let mut keywords = FxHashMap::default();
        keywords.insert("def", TokenKind::Def);
        keywords.insert("print", TokenKind::Print);

        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            keywords,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of input".to_string(),
            location: loc,
        })?;

        match ch {
            '"' => self.string_literal(loc),

            '0'..='9' => Ok(self.number_literal(ch, loc)),

            'a'..='z' | 'A'..='Z' | '_' => Ok(self.identifier_or_keyword(ch, loc)),

            '=' => Ok(Token::new(TokenKind::Assign, "=", loc)),
            '(' => Ok(Token::new(TokenKind::LParen, "(", loc)),
            ')' => Ok(Token::new(TokenKind::RParen, ")", loc)),
            ':' => Ok(Token::new(TokenKind::Colon, ":", loc)),
            ',' => Ok(Token::new(TokenKind::Comma, ",", loc)),
            '+' => Ok(Token::new(TokenKind::Plus, "+", loc)),

            _ => Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Parse a string literal, keeping the enclosing quotes in the token
    /// text. There is no escape-sequence support: the literal ends at the
    /// first following quote character.
    fn string_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut text = String::from('"');

        while let Some(ch) = self.peek() {
            self.advance();
            if ch == '"' {
                text.push('"');
                return Ok(Token::new(TokenKind::StringLiteral, text, loc));
            }
            text.push(ch);
        }

        // An unterminated literal reduces to a mismatch on its opening quote.
        Err(LexError {
            message: "Unexpected character: '\"'".to_string(),
            location: loc,
        })
    }

    /// Parse a run of ASCII digits
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Token {
        let mut text = String::new();
        text.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::new(TokenKind::NumberLiteral, text, loc)
    }

    /// Parse an identifier, then reclassify it as a keyword if it matches
    /// one exactly. Lexing the full word first gives keywords word-boundary
    /// semantics: `printer` stays an identifier.
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut text = String::new();
        text.push(first_char);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = self
            .keywords
            .get(text.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);

        Token::new(kind, text, loc)
    }

    /// Skip spaces, tabs, and newlines. A bare carriage return is not part
    /// of the language and falls through to the mismatch error.
    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\n') = self.peek() {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = *self.input.get(self.position)?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(source);
        lexer
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_function_header() {
        let mut lexer = Lexer::new("def greet(name):");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens[0].kind, TokenKind::Def);
        assert_eq!(tokens[0].text, "def");
        assert_eq!(tokens[1].kind, TokenKind::Identifier);
        assert_eq!(tokens[1].text, "greet");
        assert_eq!(tokens[2].kind, TokenKind::LParen);
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].text, "name");
        assert_eq!(tokens[4].kind, TokenKind::RParen);
        assert_eq!(tokens[5].kind, TokenKind::Colon);
        assert_eq!(tokens.len(), 6);
    }

    #[test]
    fn test_keywords_need_word_boundaries() {
        assert_eq!(
            kinds("print printer deft def"),
            vec![
                TokenKind::Print,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Def,
            ]
        );
    }

    #[test]
    fn test_string_literal_keeps_quotes() {
        let mut lexer = Lexer::new(r#""Hello ""#);
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
        assert_eq!(tokens[0].text, "\"Hello \"");
    }

    #[test]
    fn test_number_and_operators() {
        let mut lexer = Lexer::new("x = 42 + 7, (1)");
        let tokens = lexer.tokenize().unwrap();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["x", "=", "42", "+", "7", ",", "(", "1", ")"]);
        assert_eq!(tokens[2].kind, TokenKind::NumberLiteral);
        assert_eq!(tokens[5].kind, TokenKind::Comma);
    }

    #[test]
    fn test_tokens_cover_input_exactly() {
        // Note the space inside "Hello ": it belongs to the string token,
        // not to the discarded whitespace between tokens.
        let source = "def greet(name):\n    print(\"Hello \" + name)\ngreet(\"World\")";
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize().unwrap();

        // Walk the source in order: every character is either part of
        // exactly one token's text or whitespace between tokens.
        let chars: Vec<char> = source.chars().collect();
        let mut cursor = 0;
        for token in &tokens {
            while matches!(chars.get(cursor), Some(' ' | '\t' | '\n')) {
                cursor += 1;
            }
            for expected in token.text.chars() {
                assert_eq!(chars.get(cursor), Some(&expected), "gap before {}", token);
                cursor += 1;
            }
        }
        while matches!(chars.get(cursor), Some(' ' | '\t' | '\n')) {
            cursor += 1;
        }
        assert_eq!(cursor, chars.len());
    }

    #[test]
    fn test_stray_character_fails() {
        let mut lexer = Lexer::new("def f(x):\n    print(\"a\" + x) $");
        let err = lexer.tokenize().unwrap_err();

        assert!(err.message.contains('$'), "message was: {}", err.message);
        assert_eq!(err.location.line, 2);
    }

    #[test]
    fn test_carriage_return_is_rejected() {
        let mut lexer = Lexer::new("def f(x):\r\n    print(\"a\" + x)");
        let err = lexer.tokenize().unwrap_err();

        assert!(
            err.message.contains("Unexpected character"),
            "message was: {}",
            err.message
        );
        assert_eq!(err.location, SourceLocation::new(1, 10));
    }

    #[test]
    fn test_unterminated_string_fails_on_quote() {
        let mut lexer = Lexer::new("greet(\"World");
        let err = lexer.tokenize().unwrap_err();

        assert!(err.message.contains('"'));
        assert_eq!(err.location, SourceLocation::new(1, 7));
    }
}
