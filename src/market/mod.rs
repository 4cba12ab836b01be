//! Market inputs module
//!
//! Read-only snapshots supplied by the probability model and the market
//! quote collaborators, plus the traits those collaborators implement.

mod types;

pub use types::{MarketSnapshot, PredictionEstimate};

use async_trait::async_trait;

/// Source of calibrated outcome probabilities (e.g. an LLM analyst)
#[async_trait]
pub trait ProbabilityModel: Send + Sync {
    /// Estimate the YES probability for a market
    async fn estimate(&self, market_id: &str) -> anyhow::Result<PredictionEstimate>;
}

/// Source of current market prices
#[async_trait]
pub trait MarketQuote: Send + Sync {
    /// Fetch the current YES-side snapshot for a market
    async fn quote(&self, market_id: &str) -> anyhow::Result<MarketSnapshot>;
}
