//! Market input types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Market price for the YES outcome at evaluation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// Market identifier (condition id)
    pub market_id: String,
    /// YES price expressed as a probability, expected in (0, 1)
    pub implied_probability: Decimal,
    /// Liquidity available at the quoted price (USDC)
    pub available_liquidity: Decimal,
    /// Quote timestamp
    pub timestamp: DateTime<Utc>,
}

impl MarketSnapshot {
    /// Create a new snapshot
    pub fn new(
        market_id: impl Into<String>,
        implied_probability: Decimal,
        available_liquidity: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            market_id: market_id.into(),
            implied_probability,
            available_liquidity,
            timestamp,
        }
    }

    /// Implied price of the NO outcome
    pub fn no_price(&self) -> Decimal {
        Decimal::ONE - self.implied_probability
    }
}

/// Model estimate of the YES outcome probability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionEstimate {
    /// Market identifier (condition id)
    pub market_id: String,
    /// Estimated YES probability, expected in (0, 1)
    pub estimated_probability: Decimal,
    /// Model confidence in (0, 1)
    #[serde(default)]
    pub confidence: Option<Decimal>,
    /// Estimate timestamp
    pub timestamp: DateTime<Utc>,
}

impl PredictionEstimate {
    /// Create an estimate without a confidence score
    pub fn new(
        market_id: impl Into<String>,
        estimated_probability: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            market_id: market_id.into(),
            estimated_probability,
            confidence: None,
            timestamp,
        }
    }

    /// Attach a confidence score
    pub fn with_confidence(mut self, confidence: Decimal) -> Self {
        self.confidence = Some(confidence);
        self
    }
}
