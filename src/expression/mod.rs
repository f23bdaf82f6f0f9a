//! Restricted arithmetic expressions: parsing, exact evaluation and display

mod ast;
mod display;
mod errors;
mod eval;
mod fraction;
mod parser;

pub use ast::{Expression, Operator};
pub use errors::ExpressionError;
pub use eval::evaluate;
pub use fraction::Fraction;
pub use parser::{MAX_NESTING_DEPTH, MAX_OPERATORS, parse};
