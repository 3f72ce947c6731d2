pub mod formatter;

use crate::token::{Token, TokenKind};
use compact_str::CompactString;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnaryOperator {
    Bang,
    Minus,
}

impl UnaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Bang => Some(Self::Bang),
            TokenKind::Minus => Some(Self::Minus),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    EqualEqual,
    BangEqual,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(Self::Add),
            TokenKind::Minus => Some(Self::Subtract),
            TokenKind::Star => Some(Self::Multiply),
            TokenKind::Slash => Some(Self::Divide),
            TokenKind::LessThan => Some(Self::LessThan),
            TokenKind::LessThanEqual => Some(Self::LessThanEqual),
            TokenKind::GreaterThan => Some(Self::GreaterThan),
            TokenKind::GreaterThanEqual => Some(Self::GreaterThanEqual),
            TokenKind::EqualEqual => Some(Self::EqualEqual),
            TokenKind::BangEqual => Some(Self::BangEqual),
            _ => None,
        }
    }
}

/// An operator together with the token it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct Operator<K> {
    pub kind: K,
    pub token: Token,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Number(f64),
    String(CompactString),
    Bool(bool),
    Nil,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Binary {
        left: Box<Expression>,
        operator: Operator<BinaryOperator>,
        right: Box<Expression>,
    },
    Unary {
        operator: Operator<UnaryOperator>,
        right: Box<Expression>,
    },
    Grouping {
        inner: Box<Expression>,
    },
    Literal(LiteralValue),
}

impl Expression {
    pub fn binary(left: Expression, operator: Operator<BinaryOperator>, right: Expression) -> Self {
        Self::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn unary(operator: Operator<UnaryOperator>, right: Expression) -> Self {
        Self::Unary {
            operator,
            right: Box::new(right),
        }
    }

    pub fn grouping(inner: Expression) -> Self {
        Self::Grouping {
            inner: Box::new(inner),
        }
    }
}
