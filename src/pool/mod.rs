//! Problem database: JSON file layout and category index

mod core;
mod errors;

pub use core::{ProblemPool, ProblemSource};
pub use errors::PoolError;

#[cfg(test)]
mod tests;
