use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Expression is empty")]
    EmptyExpression,
    #[error("Invalid character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },
    #[error("Number literal too large: {0}")]
    NumberTooLarge(String),
    #[error("Unexpected token '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
    #[error("Parentheses nested deeper than {0} levels")]
    NestingTooDeep(usize),
    #[error("Expression has more than {0} operators")]
    TooLong(usize),
    #[error("Unexpected trailing input at position {0}")]
    TrailingInput(usize),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Division result is not an integer: {0}")]
    NonIntegerResult(String),
    #[error("Arithmetic overflow")]
    Overflow,
}
