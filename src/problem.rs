use serde::{Deserialize, Serialize};
use std::fmt;

/// How many operands every puzzle uses
pub const NUMBER_COUNT: usize = 4;

/// The four operands of a puzzle. Identity is positional.
pub type Numbers = [i64; NUMBER_COUNT];

/// Parenthesization complexity of the simplest solution, easiest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    NoParens,
    OneParen,
    MultiParen,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::NoParens, Category::OneParen, Category::MultiParen];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::NoParens => "no-parens",
            Category::OneParen => "one-paren",
            Category::MultiParen => "multi-paren",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The easiest category reaching a target, with the first expression found for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub simplest_solution: String,
}

/// A generated puzzle: reach `target` using all of `numbers` exactly once
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Problem {
    pub numbers: Numbers,
    pub target: i64,
    pub category: Category,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.numbers;
        write!(f, "{a} {b} {c} {d} -> {} ({})", self.target, self.category)
    }
}
