mod error;

use crate::diagnostic::Reporter;
use crate::token::{Span, Token, TokenKind, TokenLiteral, KEYWORD_HASHMAP};
pub use error::{LexicalError, LexicalErrorKind};

/// The result of scanning a whole source string.
#[derive(Debug, Clone)]
pub struct ScannedTokens {
    /// Always terminated by exactly one [`TokenKind::Eof`].
    pub tokens: Vec<Token>,
    pub had_error: bool,
}

#[derive(Debug)]
pub struct Lexer<'src> {
    source: &'src str,
    /// Byte offset of the first character of the token being scanned.
    start: usize,
    /// Byte offset of the next character to consume.
    current: usize,
    line: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Scans the rest of the source, reporting lexical errors as they are found.
    pub fn scan(mut self, reporter: &mut dyn Reporter) -> ScannedTokens {
        let mut tokens = Vec::new();
        let mut had_error = false;
        loop {
            match self.next_token() {
                Ok(token) => {
                    let is_eof = token.is_eof();
                    tokens.push(token);
                    if is_eof {
                        break;
                    }
                }
                Err(error) => {
                    had_error = true;
                    reporter.report_at(error.line, error.span, &error.to_string());
                }
            }
        }
        ScannedTokens { tokens, had_error }
    }

    /// Produces the next token. Once the source is exhausted every call returns an EOF token.
    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        loop {
            self.start = self.current;
            let Some(c) = self.advance() else {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    lexeme: "".into(),
                    literal: None,
                    line: self.line,
                    span: Span::empty_at(self.source.len()),
                });
            };

            let kind = match c {
                // Single character tokens
                '(' => TokenKind::LeftParenthesis,
                ')' => TokenKind::RightParenthesis,
                '{' => TokenKind::LeftBrace,
                '}' => TokenKind::RightBrace,
                ',' => TokenKind::Comma,
                '.' => TokenKind::Dot,
                '-' => TokenKind::Minus,
                '+' => TokenKind::Plus,
                ';' => TokenKind::Semicolon,
                '*' => TokenKind::Star,
                // One or two character tokens
                '!' => self.either('=', TokenKind::BangEqual, TokenKind::Bang),
                '=' => self.either('=', TokenKind::EqualEqual, TokenKind::Equal),
                '<' => self.either('=', TokenKind::LessThanEqual, TokenKind::LessThan),
                '>' => self.either('=', TokenKind::GreaterThanEqual, TokenKind::GreaterThan),
                '/' => {
                    if self.eat('/') {
                        while self.peek().is_some_and(|c| c != '\n') {
                            self.advance();
                        }
                        continue;
                    }
                    TokenKind::Slash
                }
                ' ' | '\r' | '\t' => continue,
                '\n' => {
                    self.line += 1;
                    continue;
                }
                '"' => return self.lex_string(),
                '0'..='9' => return Ok(self.lex_number()),
                'a'..='z' | 'A'..='Z' => return Ok(self.lex_ident_or_keyword()),
                c => {
                    return Err(LexicalError {
                        kind: LexicalErrorKind::Unrecognized(c),
                        line: self.line,
                        span: self.span(),
                    })
                }
            };
            return Ok(self.make_token(kind, None));
        }
    }
}

impl Lexer<'_> {
    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.current += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn either(&mut self, next: char, matched: TokenKind, otherwise: TokenKind) -> TokenKind {
        if self.eat(next) {
            matched
        } else {
            otherwise
        }
    }

    fn span(&self) -> Span {
        Span::new(self.start, self.current)
    }

    fn make_token(&self, kind: TokenKind, literal: Option<TokenLiteral>) -> Token {
        Token {
            kind,
            lexeme: self.source[self.start..self.current].into(),
            literal,
            line: self.line,
            span: self.span(),
        }
    }

    fn lex_string(&mut self) -> Result<Token, LexicalError> {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if !self.eat('"') {
            return Err(LexicalError {
                kind: LexicalErrorKind::UnclosedString,
                line: self.line,
                span: self.span(),
            });
        }

        let value = &self.source[self.start + 1..self.current - 1];
        Ok(self.make_token(
            TokenKind::StringLiteral,
            Some(TokenLiteral::String(value.into())),
        ))
    }

    fn lex_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // A trailing `.` without digits belongs to the next token.
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let value: f64 = self.source[self.start..self.current]
            .parse()
            .expect("Numeric literals are guaranteed to be parseable into f64.");
        self.make_token(TokenKind::NumericLiteral, Some(TokenLiteral::Number(value)))
    }

    fn lex_ident_or_keyword(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        let lexeme = &self.source[self.start..self.current];
        let kind = KEYWORD_HASHMAP
            .get(lexeme)
            .copied()
            .unwrap_or(TokenKind::Ident);
        self.make_token(kind, None)
    }
}
