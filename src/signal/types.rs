//! Edge evaluation types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trading side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Buy YES shares
    #[serde(rename = "BUY_YES")]
    Yes,
    /// Buy NO shares
    #[serde(rename = "BUY_NO")]
    No,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Yes => write!(f, "BUY_YES"),
            Side::No => write!(f, "BUY_NO"),
        }
    }
}

/// Outcome of comparing a model estimate against the market price
///
/// `side` is `None` when neither outcome is underpriced; `edge` is then 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeResult {
    /// Underpriced side, if any
    pub side: Option<Side>,
    /// Edge on the chosen side (never negative)
    pub edge: Decimal,
    /// Model probability of the chosen side's outcome
    pub model_probability: Decimal,
    /// Market price of the chosen side
    pub market_price: Decimal,
}

impl EdgeResult {
    /// Result with no tradeable side
    pub fn none(model_probability: Decimal, market_price: Decimal) -> Self {
        Self {
            side: None,
            edge: Decimal::ZERO,
            model_probability,
            market_price,
        }
    }

    /// True when a side was chosen and its edge clears `min_edge`
    pub fn clears(&self, min_edge: Decimal) -> bool {
        self.side.is_some() && self.edge >= min_edge
    }
}

/// Malformed collaborator input, fatal to a single evaluation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidInput {
    /// Estimate and quote refer to different markets
    #[error("market mismatch: estimate for {estimate}, quote for {quote}")]
    MarketMismatch { estimate: String, quote: String },
    /// Estimated probability not strictly inside (0, 1)
    #[error("estimated probability out of range: {0}")]
    EstimateOutOfRange(Decimal),
    /// Implied probability not strictly inside (0, 1)
    #[error("implied probability out of range: {0}")]
    ImpliedOutOfRange(Decimal),
    /// Confidence not strictly inside (0, 1)
    #[error("confidence out of range: {0}")]
    ConfidenceOutOfRange(Decimal),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_side_serde_names() {
        assert_eq!(serde_json::to_string(&Side::Yes).unwrap(), "\"BUY_YES\"");
        assert_eq!(serde_json::to_string(&Side::No).unwrap(), "\"BUY_NO\"");
        let side: Side = serde_json::from_str("\"BUY_NO\"").unwrap();
        assert_eq!(side, Side::No);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Yes.to_string(), "BUY_YES");
    }

    #[test]
    fn test_clears_threshold() {
        let result = EdgeResult {
            side: Some(Side::Yes),
            edge: dec!(0.15),
            model_probability: dec!(0.65),
            market_price: dec!(0.50),
        };
        assert!(result.clears(dec!(0.15)));
        assert!(!result.clears(dec!(0.16)));
        assert!(!EdgeResult::none(dec!(0.5), dec!(0.5)).clears(dec!(0)));
    }
}
