mod error;

use crate::{
    diagnostic::Reporter,
    expression::{BinaryOperator, Expression, LiteralValue, Operator, UnaryOperator},
    token::{Span, Token, TokenKind, TokenLiteral},
};
pub use error::{ParserError, ParserErrorKind};

type ParseResult = Result<Expression, ParserError>;

/// Deepest tree the parser will build. Groups, unary operators and each
/// folded binary operator all count as one level.
pub const MAX_NESTING_DEPTH: usize = 128;

// expression → equality
// equality   → comparison ( ( "!=" | "==" ) comparison )*
// comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
// term       → factor ( ( "-" | "+" ) factor )*
// factor     → unary ( ( "/" | "*" ) unary )*
// unary      → ( "!" | "-" ) unary | primary
// primary    → NUMBER | STRING | "true" | "false" | "nil" | "(" expression ")"
pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
    depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !tokens.last().is_some_and(Token::is_eof) {
            let (line, end) = tokens
                .last()
                .map(|token| (token.line, token.span.end()))
                .unwrap_or((1, 0));
            tokens.push(Token {
                kind: TokenKind::Eof,
                lexeme: "".into(),
                literal: None,
                line,
                span: Span::empty_at(end),
            });
        }
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parses a single expression. Tokens after a complete expression are left untouched.
    pub fn parse(&mut self) -> ParseResult {
        self.depth = 0;
        self.expression()
    }

    /// Parses a single expression, reporting a failure and recovering past it.
    pub fn parse_reporting(&mut self, reporter: &mut dyn Reporter) -> Option<Expression> {
        match self.parse() {
            Ok(expression) => Some(expression),
            Err(error) => {
                reporter.report_at(error.line(), error.token.span, &error.to_string());
                self.synchronize();
                None
            }
        }
    }

    /// Discards tokens until the start of the next top-level construct.
    ///
    /// Stops right after a `;` or in front of a declaration keyword.
    pub fn synchronize(&mut self) {
        self.advance();

        while !self.is_at_end() {
            if matches!(self.previous().kind, TokenKind::Semicolon) {
                return;
            }
            if self.peek().kind.starts_declaration() {
                return;
            }
            self.advance();
        }
    }

    pub fn is_at_end(&self) -> bool {
        self.peek().is_eof()
    }

    pub fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }
}

impl Parser {
    fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn match_any(&mut self, kinds: &[TokenKind]) -> Option<Token> {
        if kinds.iter().any(|kind| self.check(*kind)) {
            Some(self.advance().clone())
        } else {
            None
        }
    }

    fn consume(&mut self, kind: TokenKind, error: ParserErrorKind) -> Result<Token, ParserError> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(ParserError {
                kind: error,
                token: self.peek().clone(),
            })
        }
    }

    fn nest(&mut self) -> Result<(), ParserError> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(ParserError {
                kind: ParserErrorKind::TooDeeplyNested,
                token: self.peek().clone(),
            });
        }
        self.depth += 1;
        Ok(())
    }

    fn binary_tier(
        &mut self,
        operators: &[TokenKind],
        operand: fn(&mut Self) -> ParseResult,
    ) -> ParseResult {
        let depth = self.depth;
        let mut expression = operand(self)?;

        while let Some(token) = self.match_any(operators) {
            self.nest()?;
            let kind = BinaryOperator::from_token_kind(token.kind)
                .expect("Every tier operator is a binary operator.");
            let right = operand(self)?;
            expression = Expression::binary(expression, Operator { kind, token }, right);
        }
        self.depth = depth;
        Ok(expression)
    }
}

impl Parser {
    fn expression(&mut self) -> ParseResult {
        self.equality()
    }

    fn equality(&mut self) -> ParseResult {
        self.binary_tier(
            &[TokenKind::BangEqual, TokenKind::EqualEqual],
            Self::comparison,
        )
    }

    fn comparison(&mut self) -> ParseResult {
        self.binary_tier(
            &[
                TokenKind::GreaterThan,
                TokenKind::GreaterThanEqual,
                TokenKind::LessThan,
                TokenKind::LessThanEqual,
            ],
            Self::term,
        )
    }

    fn term(&mut self) -> ParseResult {
        self.binary_tier(&[TokenKind::Minus, TokenKind::Plus], Self::factor)
    }

    fn factor(&mut self) -> ParseResult {
        self.binary_tier(&[TokenKind::Slash, TokenKind::Star], Self::unary)
    }

    fn unary(&mut self) -> ParseResult {
        if let Some(token) = self.match_any(&[TokenKind::Bang, TokenKind::Minus]) {
            let kind = UnaryOperator::from_token_kind(token.kind)
                .expect("Only unary operator tokens were matched.");
            self.nest()?;
            let right = self.unary()?;
            self.depth -= 1;
            return Ok(Expression::unary(Operator { kind, token }, right));
        }
        self.primary()
    }

    fn primary(&mut self) -> ParseResult {
        let token = self.peek().clone();
        let value = match (token.kind, &token.literal) {
            (TokenKind::KeywordFalse, _) => LiteralValue::Bool(false),
            (TokenKind::KeywordTrue, _) => LiteralValue::Bool(true),
            (TokenKind::KeywordNil, _) => LiteralValue::Nil,
            (TokenKind::NumericLiteral, Some(TokenLiteral::Number(value))) => {
                LiteralValue::Number(*value)
            }
            (TokenKind::StringLiteral, Some(TokenLiteral::String(value))) => {
                LiteralValue::String(value.clone())
            }
            (TokenKind::LeftParenthesis, _) => {
                self.advance();
                self.nest()?;
                let inner = self.expression()?;
                self.depth -= 1;
                self.consume(TokenKind::RightParenthesis, ParserErrorKind::UnclosedGroup)?;
                return Ok(Expression::grouping(inner));
            }
            _ => {
                return Err(ParserError {
                    kind: ParserErrorKind::ExpectedExpression,
                    token: token.clone(),
                })
            }
        };
        self.advance();
        Ok(Expression::Literal(value))
    }
}
