use thiserror::Error;

use crate::problem::Category;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SamplerError {
    #[error("Need {needed} {category} problems but only {available} are available")]
    NotEnoughProblems {
        category: Category,
        needed: usize,
        available: usize,
    },
}
