use log::debug;

use crate::expression::ast::{Expression, Operator};
use crate::expression::errors::ExpressionError;

/// Parenthesis depth beyond which parsing gives up instead of recursing further
pub const MAX_NESTING_DEPTH: usize = 64;

/// Most binary or sign operators a single expression may contain
pub const MAX_OPERATORS: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Number { value: i64, leading_zero: bool },
    Op(Operator),
    LParen,
    RParen,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    kind: TokenKind,
    position: usize,
}

impl Token {
    fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Number { value, .. } => value.to_string(),
            TokenKind::Op(op) => op.symbol().to_string(),
            TokenKind::LParen => "(".to_string(),
            TokenKind::RParen => ")".to_string(),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        let kind = match c {
            c if c.is_whitespace() => continue,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '0'..='9' => {
                let mut literal = String::from(c);
                while let Some(&(_, next)) = chars.peek() {
                    if !next.is_ascii_digit() {
                        break;
                    }
                    literal.push(next);
                    chars.next();
                }
                let value = literal
                    .parse::<i64>()
                    .map_err(|_| ExpressionError::NumberTooLarge(literal.clone()))?;
                TokenKind::Number {
                    value,
                    leading_zero: c == '0',
                }
            }
            c => match Operator::from_symbol(c) {
                Some(op) => TokenKind::Op(op),
                None => {
                    debug!("Rejecting character '{}' at {}", c, position);
                    return Err(ExpressionError::InvalidCharacter {
                        character: c,
                        position,
                    });
                }
            },
        };
        tokens.push(Token { kind, position });
    }

    Ok(tokens)
}

/// A `/` immediately followed by a literal starting with `0` is refused up front.
fn reject_literal_zero_divisor(tokens: &[Token]) -> Result<(), ExpressionError> {
    let divides_by_zero_literal = tokens.windows(2).any(|pair| {
        matches!(
            pair,
            [
                Token {
                    kind: TokenKind::Op(Operator::Div),
                    ..
                },
                Token {
                    kind: TokenKind::Number {
                        leading_zero: true,
                        ..
                    },
                    ..
                },
            ]
        )
    });

    if divides_by_zero_literal {
        debug!("Rejecting literal division by zero");
        Err(ExpressionError::DivisionByZero)
    } else {
        Ok(())
    }
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn peek_operator(&self, precedence: u8) -> Option<Operator> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Op(op),
                ..
            }) if op.precedence() == precedence => Some(*op),
            _ => None,
        }
    }

    // expr := term (('+' | '-') term)*
    fn parse_expr(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_term()?;
        while let Some(op) = self.peek_operator(1) {
            self.pos += 1;
            let right = self.parse_term()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    // term := factor (('*' | '/') factor)*
    fn parse_term(&mut self) -> Result<Expression, ExpressionError> {
        let mut left = self.parse_factor()?;
        while let Some(op) = self.peek_operator(2) {
            self.pos += 1;
            let right = self.parse_factor()?;
            left = Expression::binary(op, left, right);
        }
        Ok(left)
    }

    // factor := ['-'] NUMBER | '(' expr ')'
    fn parse_factor(&mut self) -> Result<Expression, ExpressionError> {
        let token = self.next().ok_or(ExpressionError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number { value, .. } => Ok(Expression::Number(value)),
            TokenKind::Op(Operator::Sub) => match self.next() {
                Some(Token {
                    kind: TokenKind::Number { value, .. },
                    ..
                }) => Ok(Expression::Number(-value)),
                Some(other) => Err(ExpressionError::UnexpectedToken {
                    token: other.describe(),
                    position: other.position,
                }),
                None => Err(ExpressionError::UnexpectedEnd),
            },
            TokenKind::LParen => {
                if self.depth >= MAX_NESTING_DEPTH {
                    return Err(ExpressionError::NestingTooDeep(MAX_NESTING_DEPTH));
                }
                self.depth += 1;
                let inner = self.parse_expr()?;
                self.depth -= 1;
                match self.next() {
                    Some(Token {
                        kind: TokenKind::RParen,
                        ..
                    }) => Ok(inner),
                    Some(other) => Err(ExpressionError::UnexpectedToken {
                        token: other.describe(),
                        position: other.position,
                    }),
                    None => Err(ExpressionError::UnexpectedEnd),
                }
            }
            _ => Err(ExpressionError::UnexpectedToken {
                token: token.describe(),
                position: token.position,
            }),
        }
    }
}

/// Parse an arithmetic string into an [`Expression`].
///
/// The accepted grammar is closed: integer literals, `+ - * /`, parentheses
/// and whitespace. A `-` directly before a literal in operand position makes
/// it negative (`2 - -1`); it cannot negate a parenthesized group.
///
/// # Errors
///
/// Returns an error when the input contains any other character, is
/// malformed, has more than [`MAX_OPERATORS`] operators, or divides by a
/// literal starting with `0`.
pub fn parse(input: &str) -> Result<Expression, ExpressionError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ExpressionError::EmptyExpression);
    }
    let operators = tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::Op(_)))
        .count();
    if operators > MAX_OPERATORS {
        debug!("Rejecting expression with {} operators", operators);
        return Err(ExpressionError::TooLong(MAX_OPERATORS));
    }
    reject_literal_zero_divisor(&tokens)?;

    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.parse_expr()?;

    if let Some(extra) = parser.peek() {
        return Err(ExpressionError::TrailingInput(extra.position));
    }
    Ok(expr)
}
