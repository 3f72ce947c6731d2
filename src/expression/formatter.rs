use super::{BinaryOperator, Expression, LiteralValue, UnaryOperator};

pub trait ExpressionFormatter {
    fn format(&self, tree: &Expression) -> String;
}

pub struct DebugFormatter;

impl ExpressionFormatter for DebugFormatter {
    fn format(&self, tree: &Expression) -> String {
        format!("{tree:?}")
    }
}

/// Fully parenthesized prefix notation, e.g. `(+ 1 (group (* 2 3)))`.
pub struct SExpressionFormatter;

impl SExpressionFormatter {
    fn format_literal(value: &LiteralValue) -> String {
        match value {
            LiteralValue::Number(v) => format!("{v}"),
            LiteralValue::String(v) => format!("{v}"),
            LiteralValue::Bool(v) => format!("{v}"),
            LiteralValue::Nil => "nil".into(),
        }
    }

    fn format_node(node: &Expression) -> String {
        match node {
            Expression::Literal(value) => Self::format_literal(value),
            Expression::Unary { operator, right } => {
                format!(
                    "({} {})",
                    Self::format_unary_operator(&operator.kind),
                    Self::format_node(right),
                )
            }
            Expression::Binary {
                left,
                operator,
                right,
            } => {
                format!(
                    "({} {} {})",
                    Self::format_binary_operator(&operator.kind),
                    Self::format_node(left),
                    Self::format_node(right),
                )
            }
            Expression::Grouping { inner } => format!("(group {})", Self::format_node(inner)),
        }
    }

    fn format_unary_operator(operator: &UnaryOperator) -> &'static str {
        match operator {
            UnaryOperator::Bang => "!",
            UnaryOperator::Minus => "-",
        }
    }

    fn format_binary_operator(operator: &BinaryOperator) -> &'static str {
        match operator {
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::LessThan => "<",
            BinaryOperator::LessThanEqual => "<=",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::GreaterThanEqual => ">=",
            BinaryOperator::EqualEqual => "==",
            BinaryOperator::BangEqual => "!=",
        }
    }
}

impl ExpressionFormatter for SExpressionFormatter {
    fn format(&self, tree: &Expression) -> String {
        Self::format_node(tree)
    }
}
