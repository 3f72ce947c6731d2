use crate::token::Token;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParserErrorKind {
    #[error("Expect expression")]
    ExpectedExpression,
    #[error("Expect ')' after expression")]
    UnclosedGroup,
    #[error("Expression nests too deeply")]
    TooDeeplyNested,
}

#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind}, found {}.", describe_token(.token))]
pub struct ParserError {
    pub kind: ParserErrorKind,
    /// The token the parser was looking at when it gave up.
    pub token: Token,
}

impl ParserError {
    pub fn line(&self) -> u32 {
        self.token.line
    }
}

fn describe_token(token: &Token) -> String {
    if token.is_eof() {
        "end of input".into()
    } else {
        format!("'{}'", token.lexeme)
    }
}
