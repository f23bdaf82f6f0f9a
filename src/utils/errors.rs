use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("Expected exactly {expected} numbers, got {found}")]
    WrongNumberCount { expected: usize, found: usize },
}
