//! Shisoku - generate and classify four-number arithmetic puzzles
//!
//! A puzzle gives four small integers and a target. The player combines all
//! four numbers exactly once with `+ - * /` and parentheses to reach the
//! target. This library finds the simplest such expression, classifies the
//! puzzle by how much parenthesization it needs, and generates pools of
//! puzzles that meet per-category quotas.

pub mod classifier;
pub mod expression;
pub mod filter;
pub mod generator;
pub mod pool;
pub mod problem;
pub mod sampler;
pub mod utils;

// Re-export the main public API
pub use classifier::{Classifier, TEMPLATES, Template};
pub use expression::{Expression, ExpressionError, Operator, evaluate};
pub use filter::is_trivial;
pub use generator::{BatchGenerator, GenerationReport, GeneratorConfig, GeneratorError, Quotas};
pub use pool::{PoolError, ProblemPool, ProblemSource};
pub use problem::{Category, Classification, Numbers, Problem};
pub use sampler::{Difficulty, SamplerError};
pub use utils::{UtilsError, permutations, validate_numbers};

/// Classify a puzzle with the built-in templates
///
/// # Returns
///
/// * `Some(Classification)` - The easiest category reaching `target`, with the
///   first matching expression
/// * `None` - If no arrangement of the numbers reaches the target
///
/// # Examples
///
/// ```
/// use shisoku::{Category, classify};
///
/// let found = classify(&[2, 3, 4, 1], 20);
/// assert_eq!(found.map(|c| c.category), Some(Category::OneParen));
/// ```
pub fn classify(numbers: &Numbers, target: i64) -> Option<Classification> {
    Classifier::default().classify(numbers, target)
}

/// Generate problems for the given quotas with the default configuration
///
/// Numbers are drawn from 0 to 9 and targets from 0 to 20. Check
/// [`GenerationReport::is_complete`] to see whether every quota was met.
pub fn generate(quotas: &Quotas) -> GenerationReport {
    BatchGenerator::default().generate(quotas)
}
