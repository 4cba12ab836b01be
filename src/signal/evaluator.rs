//! Edge evaluation
//!
//! Compares the model's YES probability against the market's implied YES
//! price and picks whichever side the market underprices.

use super::{EdgeResult, InvalidInput, Side};
use crate::market::{MarketSnapshot, PredictionEstimate};
use rust_decimal::Decimal;

/// Stateless edge evaluator
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeEvaluator;

impl EdgeEvaluator {
    /// Create a new evaluator
    pub fn new() -> Self {
        Self
    }

    /// Validate collaborator input before any arithmetic
    pub fn validate(
        estimate: &PredictionEstimate,
        quote: &MarketSnapshot,
    ) -> Result<(), InvalidInput> {
        if estimate.market_id != quote.market_id {
            return Err(InvalidInput::MarketMismatch {
                estimate: estimate.market_id.clone(),
                quote: quote.market_id.clone(),
            });
        }
        if !in_open_unit(estimate.estimated_probability) {
            return Err(InvalidInput::EstimateOutOfRange(
                estimate.estimated_probability,
            ));
        }
        if !in_open_unit(quote.implied_probability) {
            return Err(InvalidInput::ImpliedOutOfRange(quote.implied_probability));
        }
        if let Some(confidence) = estimate.confidence {
            if !in_open_unit(confidence) {
                return Err(InvalidInput::ConfidenceOutOfRange(confidence));
            }
        }
        Ok(())
    }

    /// Evaluate edge for both sides of a binary market
    ///
    /// - YES edge = p_model - p_market
    /// - NO edge = (1 - p_model) - (1 - p_market) = p_market - p_model
    pub fn evaluate(
        &self,
        estimate: &PredictionEstimate,
        quote: &MarketSnapshot,
    ) -> Result<EdgeResult, InvalidInput> {
        Self::validate(estimate, quote)?;

        let p_model = estimate.estimated_probability;
        let p_market = quote.implied_probability;

        let yes_edge = p_model - p_market;
        let no_edge = (Decimal::ONE - p_model) - (Decimal::ONE - p_market);

        let result = if yes_edge > Decimal::ZERO && yes_edge >= no_edge {
            EdgeResult {
                side: Some(Side::Yes),
                edge: yes_edge,
                model_probability: p_model,
                market_price: p_market,
            }
        } else if no_edge > Decimal::ZERO {
            EdgeResult {
                side: Some(Side::No),
                edge: no_edge,
                model_probability: Decimal::ONE - p_model,
                market_price: quote.no_price(),
            }
        } else {
            EdgeResult::none(p_model, p_market)
        };

        tracing::debug!(
            market_id = %quote.market_id,
            %yes_edge,
            %no_edge,
            side = ?result.side,
            "Edge evaluated"
        );

        Ok(result)
    }
}

fn in_open_unit(p: Decimal) -> bool {
    p > Decimal::ZERO && p < Decimal::ONE
}
