//! Execution module
//!
//! Boundary to the order-placing layer (paper mode implemented here)

mod paper;

pub use paper::{paper_pnl, PaperExecution};

use crate::engine::TradeInstruction;
use async_trait::async_trait;

/// Trait for execution layer implementations
///
/// Implementations report results later as
/// [`SettledTrade`](crate::bankroll::SettledTrade)s carrying the
/// instruction id.
#[async_trait]
pub trait Execution: Send + Sync {
    /// Submit an accepted instruction
    async fn submit(&self, instruction: &TradeInstruction) -> anyhow::Result<()>;
}
