//! Decision pipeline: risk gate, edge evaluation, sizing

use super::{Decision, DecisionRationale, EngineError, NoTradeVerdict, TradeInstruction};
use crate::bankroll::BankrollState;
use crate::market::{MarketSnapshot, PredictionEstimate};
use crate::risk::{GateResult, NoTradeReason, PositionSizer, RiskGate, RiskLimits, Sizing};
use crate::signal::EdgeEvaluator;
use uuid::Uuid;

/// Turns an estimate and a quote into a trade instruction or a verdict
///
/// Holds no state besides its stateless stages; every call is a pure
/// function of its arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecisionEngine {
    gate: RiskGate,
    evaluator: EdgeEvaluator,
    sizer: PositionSizer,
}

impl DecisionEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide on one market
    pub fn decide(
        &self,
        estimate: &PredictionEstimate,
        quote: &MarketSnapshot,
        bankroll: &BankrollState,
        limits: &RiskLimits,
    ) -> Result<Decision, EngineError> {
        let market_id = quote.market_id.as_str();

        if let GateResult::Blocked(reason) = self.gate.check(bankroll, limits) {
            return Ok(no_trade(market_id, reason));
        }

        let edge = self.evaluator.evaluate(estimate, quote)?;
        let side = match edge.side {
            Some(side) if edge.edge >= limits.min_edge => side,
            _ => {
                tracing::debug!(
                    market_id,
                    edge = %edge.edge,
                    min_edge = %limits.min_edge,
                    "Edge below threshold"
                );
                return Ok(no_trade(market_id, NoTradeReason::EdgeTooSmall));
            }
        };

        let sizing = match self.sizer.size(&edge, bankroll, limits) {
            Sizing::Stake(sizing) => sizing,
            Sizing::Unaffordable { floor, cap } => {
                tracing::debug!(market_id, %floor, %cap, "No affordable stake");
                return Ok(no_trade(market_id, NoTradeReason::StakeUnaffordable));
            }
        };

        let instruction = TradeInstruction {
            id: Uuid::new_v4(),
            market_id: market_id.to_string(),
            side,
            stake: sizing.stake,
            limit_price: edge.market_price,
            expected_edge: edge.edge,
            rationale: DecisionRationale {
                estimated_probability: estimate.estimated_probability,
                implied_probability: quote.implied_probability,
                confidence: estimate.confidence,
                balance: bankroll.current_balance,
                sizing,
            },
            timestamp: quote.timestamp,
        };

        tracing::info!(
            market_id,
            %side,
            stake = %instruction.stake,
            edge = %instruction.expected_edge,
            "Trade accepted"
        );

        Ok(Decision::Trade(instruction))
    }
}

fn no_trade(market_id: &str, reason: NoTradeReason) -> Decision {
    Decision::NoTrade(NoTradeVerdict {
        market_id: market_id.to_string(),
        reason,
    })
}
