//! Per-session problem selection by difficulty

mod core;
mod errors;

pub use core::{Difficulty, category_counts, sample};
pub use errors::SamplerError;
