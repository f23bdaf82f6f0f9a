use std::ops::RangeInclusive;

use crate::generator::errors::GeneratorError;

pub const DEFAULT_MAX_TRIES_PER_PROBLEM: usize = 1000;
pub const DEFAULT_CHUNK_SIZE: usize = 256;

/// Configuration for batch generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Inclusive range each of the four numbers is drawn from
    pub number_range: RangeInclusive<i64>,
    /// Inclusive range the target is drawn from
    pub target_range: RangeInclusive<i64>,
    /// Try budget is this times the total quota
    pub max_tries_per_problem: usize,
    /// Fixed seed for reproducible batches; entropy when `None`
    pub seed: Option<u64>,
    /// Draws classified in parallel per round
    pub chunk_size: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            number_range: 0..=9,
            target_range: 0..=20,
            max_tries_per_problem: DEFAULT_MAX_TRIES_PER_PROBLEM,
            seed: None,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl GeneratorConfig {
    /// # Errors
    ///
    /// Returns an error when either range is empty or the try budget or chunk
    /// size is zero.
    pub fn validate(&self) -> Result<(), GeneratorError> {
        for (name, range) in [("number", &self.number_range), ("target", &self.target_range)] {
            if range.is_empty() {
                return Err(GeneratorError::EmptyRange {
                    name,
                    start: *range.start(),
                    end: *range.end(),
                });
            }
        }
        if self.max_tries_per_problem == 0 {
            return Err(GeneratorError::ZeroTryBudget);
        }
        if self.chunk_size == 0 {
            return Err(GeneratorError::ZeroChunkSize);
        }
        Ok(())
    }
}
