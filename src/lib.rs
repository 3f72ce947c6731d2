pub mod diagnostic;
pub mod evaluator;
pub mod expression;
pub mod lexer;
pub mod parser;
pub mod runner;
pub mod token;
pub mod value;
