use super::{Token, TokenLiteral};
use crate::lexer::LexicalError;

/// Interface for creating new token formatters.
pub trait TokenFormatter {
    /// Formats a token into a string.
    fn format(&self, token: &Token) -> String;
    /// Formats a lexer error into a string.
    fn format_lexical_error(&self, error: &LexicalError) -> String;
}

/// Prints tokens as `KIND lexeme literal`, with `null` for tokens without a literal.
pub struct BasicFormatter;

impl TokenFormatter for BasicFormatter {
    fn format(&self, token: &Token) -> String {
        let literal = match token.literal {
            Some(TokenLiteral::Number(value)) => format!("{value:?}"),
            Some(TokenLiteral::String(ref value)) => format!("{value}"),
            None => "null".into(),
        };
        format!("{} {} {literal}", token.kind, token.lexeme)
    }

    fn format_lexical_error(&self, error: &LexicalError) -> String {
        format!("[line {}] Error: {}", error.line, error.kind)
    }
}

pub struct DebugFormatter;

impl TokenFormatter for DebugFormatter {
    fn format(&self, token: &Token) -> String {
        format!("{token:?}")
    }

    fn format_lexical_error(&self, error: &LexicalError) -> String {
        format!("{error:?}")
    }
}
