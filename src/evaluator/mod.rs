use crate::{
    expression::{BinaryOperator, Expression, LiteralValue, Operator, UnaryOperator},
    value::{
        error::{RuntimeError, RuntimeErrorKind},
        LoxValue,
    },
};

/// Tree-walking evaluator for a single expression.
///
/// Operands are always evaluated left to right and eagerly. The first type error aborts the
/// whole evaluation.
#[derive(Debug, Default)]
pub struct ExpressionEvaluator;

impl ExpressionEvaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, expression: &Expression) -> Result<LoxValue, RuntimeError> {
        let result = match expression {
            Expression::Literal(value) => Self::evaluate_literal(value),
            Expression::Grouping { inner } => self.evaluate(inner)?,
            Expression::Unary { operator, right } => {
                let right = self.evaluate(right)?;
                Self::evaluate_unary(operator, &right)?
            }
            Expression::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                Self::evaluate_binary(operator, &left, &right)?
            }
        };
        Ok(result)
    }

    fn evaluate_literal(value: &LiteralValue) -> LoxValue {
        match value {
            LiteralValue::Number(v) => LoxValue::Number(*v),
            LiteralValue::String(v) => LoxValue::String(v.clone()),
            LiteralValue::Bool(v) => LoxValue::Bool(*v),
            LiteralValue::Nil => LoxValue::Nil,
        }
    }

    fn evaluate_unary(
        operator: &Operator<UnaryOperator>,
        rhs: &LoxValue,
    ) -> Result<LoxValue, RuntimeError> {
        let result = match operator.kind {
            UnaryOperator::Bang => Ok(LoxValue::Bool(rhs.logical_not())),
            UnaryOperator::Minus => rhs.numeric_negate(),
        };
        result.map_err(|kind| Self::attach(kind, operator))
    }

    fn evaluate_binary(
        operator: &Operator<BinaryOperator>,
        lhs: &LoxValue,
        rhs: &LoxValue,
    ) -> Result<LoxValue, RuntimeError> {
        let result = match operator.kind {
            BinaryOperator::Add => lhs.add(rhs),
            BinaryOperator::Subtract => lhs.subtract(rhs),
            BinaryOperator::Multiply => lhs.multiply(rhs),
            BinaryOperator::Divide => lhs.divide(rhs),
            BinaryOperator::LessThan => lhs.less_than(rhs),
            BinaryOperator::LessThanEqual => lhs.less_than_or_equal(rhs),
            BinaryOperator::GreaterThan => lhs.greater_than(rhs),
            BinaryOperator::GreaterThanEqual => lhs.greater_than_or_equal(rhs),
            BinaryOperator::EqualEqual => Ok(LoxValue::Bool(lhs.is_equal(rhs))),
            BinaryOperator::BangEqual => Ok(LoxValue::Bool(lhs.is_not_equal(rhs))),
        };
        result.map_err(|kind| Self::attach(kind, operator))
    }

    fn attach<K>(kind: RuntimeErrorKind, operator: &Operator<K>) -> RuntimeError {
        RuntimeError {
            kind,
            token: operator.token.clone(),
        }
    }
}
