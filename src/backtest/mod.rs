//! Backtesting module
//!
//! Replays recorded estimate/quote rounds through the decision engine with
//! paper settlement

mod analytics;
mod replay;
mod simulator;

pub use analytics::ReplaySummary;
pub use replay::{ReplayRound, RoundStream};
pub use simulator::ReplayRunner;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Replay configuration
#[derive(Debug, Clone)]
pub struct ReplayConfig {
    /// Starting balance
    pub initial_balance: Decimal,
    /// Fee rate charged on each stake
    pub fee_rate: Decimal,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            initial_balance: dec!(100),
            fee_rate: Decimal::ZERO,
        }
    }
}
