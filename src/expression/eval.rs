use log::debug;

use crate::expression::ast::Expression;
use crate::expression::errors::ExpressionError;
use crate::expression::fraction::Fraction;
use crate::expression::parser::parse;

impl Expression {
    /// Exact value of the expression. Intermediate quotients may be fractional.
    ///
    /// # Errors
    ///
    /// Returns an error when a divisor evaluates to zero or any intermediate
    /// value overflows `i64`.
    pub fn evaluate(&self) -> Result<Fraction, ExpressionError> {
        match self {
            Expression::Number(n) => Ok(Fraction::from_integer(*n)),
            Expression::Add(l, r) => l
                .evaluate()?
                .checked_add(r.evaluate()?)
                .ok_or(ExpressionError::Overflow),
            Expression::Sub(l, r) => l
                .evaluate()?
                .checked_sub(r.evaluate()?)
                .ok_or(ExpressionError::Overflow),
            Expression::Mul(l, r) => l
                .evaluate()?
                .checked_mul(r.evaluate()?)
                .ok_or(ExpressionError::Overflow),
            Expression::Div(l, r) => {
                let left = l.evaluate()?;
                let right = r.evaluate()?;
                if right.is_zero() {
                    debug!("Division by zero attempted: {}", self);
                    return Err(ExpressionError::DivisionByZero);
                }
                left.checked_div(right).ok_or(ExpressionError::Overflow)
            }
        }
    }
}

/// Evaluate a restricted arithmetic string to an integer.
///
/// Whenever the text contains a `/`, only the final value is required to be
/// whole; `(2 / 4) * 2` evaluates to `1`.
///
/// # Errors
///
/// Returns an error when:
/// - the text has characters other than digits, `+ - * /`, parentheses and whitespace
/// - the text is malformed
/// - a division by zero occurs, literally or at run time
/// - an intermediate value overflows
/// - the final value is not an integer
pub fn evaluate(input: &str) -> Result<i64, ExpressionError> {
    let result = parse(input).and_then(|expr| {
        let value = expr.evaluate()?;
        value
            .to_integer()
            .ok_or_else(|| ExpressionError::NonIntegerResult(value.to_string()))
    });

    match &result {
        Ok(value) => debug!("'{}' evaluated to {}", input, value),
        Err(e) => debug!("'{}' failed to evaluate: {}", input, e),
    }

    result
}
