//! Decision output types

use crate::risk::{NoTradeReason, StakeSizing};
use crate::signal::{InvalidInput, Side};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Inputs and intermediate values behind an instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRationale {
    /// Model YES probability
    pub estimated_probability: Decimal,
    /// Market YES price
    pub implied_probability: Decimal,
    /// Model confidence, if supplied
    pub confidence: Option<Decimal>,
    /// Balance the stake was sized against
    pub balance: Decimal,
    /// Sizing breakdown
    pub sizing: StakeSizing,
}

/// An accepted trade, handed to the execution layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeInstruction {
    /// Instruction id; settlements must echo it back
    pub id: Uuid,
    /// Market identifier
    pub market_id: String,
    /// Side to buy
    pub side: Side,
    /// Stake in USDC
    pub stake: Decimal,
    /// Price of the chosen side's share at decision time
    pub limit_price: Decimal,
    /// Edge on the chosen side
    pub expected_edge: Decimal,
    /// Audit trail
    pub rationale: DecisionRationale,
    /// Quote timestamp the decision was based on
    pub timestamp: DateTime<Utc>,
}

impl TradeInstruction {
    /// Ranking score: edge weighted by model confidence (1 when absent)
    pub fn score(&self) -> Decimal {
        self.expected_edge * self.rationale.confidence.unwrap_or(Decimal::ONE)
    }
}

/// A candidate that produced no trade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoTradeVerdict {
    /// Market identifier
    pub market_id: String,
    /// Why no trade was produced
    pub reason: NoTradeReason,
}

/// Result of a decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum Decision {
    /// Trade accepted
    Trade(TradeInstruction),
    /// No trade
    NoTrade(NoTradeVerdict),
}

impl Decision {
    /// Market the decision is about
    pub fn market_id(&self) -> &str {
        match self {
            Decision::Trade(instruction) => &instruction.market_id,
            Decision::NoTrade(verdict) => &verdict.market_id,
        }
    }

    /// The no-trade reason, if any
    pub fn reason(&self) -> Option<NoTradeReason> {
        match self {
            Decision::Trade(_) => None,
            Decision::NoTrade(verdict) => Some(verdict.reason),
        }
    }

    /// The instruction, if a trade was accepted
    pub fn instruction(&self) -> Option<&TradeInstruction> {
        match self {
            Decision::Trade(instruction) => Some(instruction),
            Decision::NoTrade(_) => None,
        }
    }
}

/// Decision engine errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Malformed collaborator input
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}
