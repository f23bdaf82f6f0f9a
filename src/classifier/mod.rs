mod core;
mod templates;

pub use core::Classifier;
pub use templates::{OPERATOR_COUNT, TEMPLATES, Template};
