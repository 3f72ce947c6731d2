use crate::{
    diagnostic::Reporter,
    evaluator::ExpressionEvaluator,
    expression::formatter::{ExpressionFormatter, SExpressionFormatter},
    lexer::Lexer,
    parser::Parser,
    value::formatter::{BasicFormatter, ValueFormatter},
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Render the parsed tree as an S-expression.
    Print,
    Evaluate,
}

/// The stage that stopped a run. Its diagnostics have already gone to the reporter.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RunFailure {
    #[error("Source contains lexical errors.")]
    Lexical,
    #[error("Source could not be parsed.")]
    Syntax,
    #[error("Evaluation failed.")]
    Runtime,
}

/// Scans, parses and then prints or evaluates one piece of source text.
pub fn run(
    source: &str,
    action: Action,
    reporter: &mut dyn Reporter,
) -> Result<String, RunFailure> {
    let scanned = Lexer::new(source).scan(reporter);
    if scanned.had_error {
        return Err(RunFailure::Lexical);
    }

    let mut parser = Parser::new(scanned.tokens);
    let expression = parser.parse_reporting(reporter).ok_or(RunFailure::Syntax)?;

    match action {
        Action::Print => Ok(SExpressionFormatter.format(&expression)),
        Action::Evaluate => match ExpressionEvaluator::new().evaluate(&expression) {
            Ok(value) => Ok(BasicFormatter.format(&value)),
            Err(error) => {
                reporter.report_at(error.line(), error.token.span, &error.to_string());
                Err(RunFailure::Runtime)
            }
        },
    }
}
