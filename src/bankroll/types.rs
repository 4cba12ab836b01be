//! Bankroll types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Financial state read by the decision pipeline
///
/// Only [`BankrollLedger`](super::BankrollLedger) mutates it; everything
/// else works on a cloned snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankrollState {
    /// Current balance in USDC, never negative
    pub current_balance: Decimal,
    /// Highest balance seen this session
    pub peak_balance: Decimal,
    /// Consecutive winning settlements
    pub consecutive_wins: u32,
    /// Consecutive losing settlements
    pub consecutive_losses: u32,
    /// Settled trades since `day_boundary` began
    pub trades_today: u32,
    /// Trading day the daily counter belongs to
    pub day_boundary: NaiveDate,
}

impl BankrollState {
    /// Fresh state for a new session
    pub fn new(initial_balance: Decimal, day: NaiveDate) -> Self {
        Self {
            current_balance: initial_balance,
            peak_balance: initial_balance,
            consecutive_wins: 0,
            consecutive_losses: 0,
            trades_today: 0,
            day_boundary: day,
        }
    }

    /// Fractional decline from peak balance
    pub fn drawdown(&self) -> Decimal {
        if self.peak_balance <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.peak_balance - self.current_balance) / self.peak_balance
    }
}

/// A resolved trade reported back by the execution layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettledTrade {
    /// Id of the instruction that opened the trade
    pub trade_id: Uuid,
    /// Market identifier
    pub market_id: String,
    /// Realized profit or loss, net of fees
    pub net_pnl: Decimal,
    /// Settlement timestamp
    pub timestamp: DateTime<Utc>,
}

impl SettledTrade {
    /// Create a settlement record
    pub fn new(
        trade_id: Uuid,
        market_id: impl Into<String>,
        net_pnl: Decimal,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            trade_id,
            market_id: market_id.into(),
            net_pnl,
            timestamp,
        }
    }
}

/// Ledger errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Settlement for this trade was already applied
    #[error("settlement already applied for trade {0}")]
    DuplicateSettlement(Uuid),
}

/// Running session totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    /// Balance when the session started
    pub starting_balance: Decimal,
    /// Sum of settled P&L
    pub realized_pnl: Decimal,
    /// Settlements with positive P&L
    pub wins: u32,
    /// Settlements with negative P&L
    pub losses: u32,
    /// Settlements with zero P&L
    pub flats: u32,
}

impl SessionStats {
    /// Empty stats for a session starting at `starting_balance`
    pub fn new(starting_balance: Decimal) -> Self {
        Self {
            starting_balance,
            realized_pnl: Decimal::ZERO,
            wins: 0,
            losses: 0,
            flats: 0,
        }
    }

    /// Total settlements
    pub fn settlements(&self) -> u32 {
        self.wins + self.losses + self.flats
    }

    /// Wins over decided (non-flat) settlements
    pub fn win_rate(&self) -> Decimal {
        let decided = self.wins + self.losses;
        if decided == 0 {
            return Decimal::ZERO;
        }
        Decimal::from(self.wins) / Decimal::from(decided)
    }

    /// Realized P&L relative to the starting balance
    pub fn return_pct(&self) -> Decimal {
        if self.starting_balance <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        self.realized_pnl / self.starting_balance
    }

    /// Format a status block for the CLI
    pub fn format_table(&self, state: &BankrollState) -> String {
        format!(
            r#"
══════════════════════════════════════════════════════
               SESSION STATUS
══════════════════════════════════════════════════════
Balance:          {:.2} ({:+.2})
Return:           {:+.2}%
Peak Balance:     {:.2}
Drawdown:         {:.2}%
Win Rate:         {:.1}%
Settled:          {} ({}W / {}L / {}F)
Trades Today:     {}
══════════════════════════════════════════════════════
"#,
            state.current_balance,
            self.realized_pnl,
            self.return_pct() * dec!(100),
            state.peak_balance,
            state.drawdown() * dec!(100),
            self.win_rate() * dec!(100),
            self.settlements(),
            self.wins,
            self.losses,
            self.flats,
            state.trades_today,
        )
    }
}
