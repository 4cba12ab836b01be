//! Signal module
//!
//! Detects mispriced outcomes by comparing model and market probabilities

mod evaluator;
mod types;

pub use evaluator::EdgeEvaluator;
pub use types::{EdgeResult, InvalidInput, Side};
