//! Decision engine module
//!
//! Orchestrates risk gate, edge evaluation, and sizing into one decision

mod decision;
mod types;

pub use crate::risk::NoTradeReason;
pub use decision::DecisionEngine;
pub use types::{Decision, DecisionRationale, EngineError, NoTradeVerdict, TradeInstruction};
