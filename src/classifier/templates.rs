use crate::expression::Operator;
use crate::problem::{Category, NUMBER_COUNT, Numbers};

/// Number of operator slots in a template
pub const OPERATOR_COUNT: usize = NUMBER_COUNT - 1;

/// A parenthesization shape over four operands and three operators.
///
/// Patterns use `a`..`d` for the operands and `op1`..`op3` for the operators;
/// every other character is copied verbatim when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub pattern: &'static str,
    pub category: Category,
}

impl Template {
    pub const fn new(pattern: &'static str, category: Category) -> Self {
        Self { pattern, category }
    }

    /// Substitute operands and operators into the pattern.
    ///
    /// A slot that does not resolve is left as text, which the evaluator then
    /// rejects as an invalid character.
    pub fn render(&self, operands: &Numbers, operators: &[Operator; OPERATOR_COUNT]) -> String {
        let mut out = String::with_capacity(self.pattern.len() + 8);
        let mut chars = self.pattern.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                'a'..='d' => {
                    let slot = usize::from(c as u8 - b'a');
                    match operands.get(slot) {
                        Some(n) => out.push_str(&n.to_string()),
                        None => out.push(c),
                    }
                }
                'o' if chars.peek() == Some(&'p') => {
                    chars.next();
                    let op = chars
                        .peek()
                        .and_then(|d| d.to_digit(10))
                        .and_then(|d| (d as usize).checked_sub(1))
                        .and_then(|slot| operators.get(slot));
                    match op {
                        Some(op) => {
                            chars.next();
                            out.push(op.symbol());
                        }
                        None => out.push_str("op"),
                    }
                }
                other => out.push(other),
            }
        }

        out
    }
}

/// Search order: no grouping, then single-level grouping, then nested grouping
pub const TEMPLATES: [Template; 9] = [
    Template::new("a op1 b op2 c op3 d", Category::NoParens),
    Template::new("(a op1 b) op2 c op3 d", Category::OneParen),
    Template::new("a op1 (b op2 c) op3 d", Category::OneParen),
    Template::new("a op1 b op2 (c op3 d)", Category::OneParen),
    Template::new("(a op1 b) op2 (c op3 d)", Category::OneParen),
    Template::new("((a op1 b) op2 c) op3 d", Category::MultiParen),
    Template::new("(a op1 (b op2 c)) op3 d", Category::MultiParen),
    Template::new("a op1 ((b op2 c) op3 d)", Category::MultiParen),
    Template::new("a op1 (b op2 (c op3 d))", Category::MultiParen),
];
