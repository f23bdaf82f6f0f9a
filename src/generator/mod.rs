mod config;
mod core;
mod errors;
mod report;

pub use config::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_TRIES_PER_PROBLEM, GeneratorConfig};
pub use core::BatchGenerator;
pub use errors::GeneratorError;
pub use report::{GenerationReport, Quotas, total_quota};

#[cfg(test)]
mod tests;
