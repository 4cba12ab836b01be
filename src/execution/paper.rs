//! Paper trading execution

use super::Execution;
use crate::bankroll::SettledTrade;
use crate::engine::TradeInstruction;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Net P&L of a binary share position held to resolution
///
/// A winning stake at `price` buys `stake / price` shares paying $1 each,
/// netting `stake * (1 / price - 1)`; a losing stake nets `-stake`. Fees are
/// charged on the stake either way.
pub fn paper_pnl(stake: Decimal, price: Decimal, won: bool, fee_rate: Decimal) -> Decimal {
    let fees = stake * fee_rate;
    if won && price > Decimal::ZERO {
        stake / price - stake - fees
    } else {
        -stake - fees
    }
}

/// Paper execution engine with simulated fills
#[derive(Debug, Clone)]
pub struct PaperExecution {
    fee_rate: Decimal,
    submitted: Arc<RwLock<Vec<TradeInstruction>>>,
}

impl PaperExecution {
    /// Create a new paper execution engine
    pub fn new(fee_rate: Decimal) -> Self {
        Self {
            fee_rate,
            submitted: Arc::new(RwLock::new(vec![])),
        }
    }

    /// Instructions submitted so far
    pub async fn submitted(&self) -> Vec<TradeInstruction> {
        self.submitted.read().await.clone()
    }

    /// Resolve a submitted instruction into a settlement
    pub fn settle(
        &self,
        instruction: &TradeInstruction,
        won: bool,
        timestamp: DateTime<Utc>,
    ) -> SettledTrade {
        let net_pnl = paper_pnl(instruction.stake, instruction.limit_price, won, self.fee_rate);
        SettledTrade::new(instruction.id, instruction.market_id.clone(), net_pnl, timestamp)
    }
}

impl Default for PaperExecution {
    fn default() -> Self {
        Self::new(Decimal::ZERO)
    }
}

#[async_trait]
impl Execution for PaperExecution {
    async fn submit(&self, instruction: &TradeInstruction) -> anyhow::Result<()> {
        let mut submitted = self.submitted.write().await;
        submitted.push(instruction.clone());

        tracing::info!(
            id = %instruction.id,
            market_id = %instruction.market_id,
            side = %instruction.side,
            stake = %instruction.stake,
            "Paper order filled"
        );
        Ok(())
    }
}
