//! Bankroll ledger: the single writer of bankroll state

use super::{BankrollState, LedgerError, SessionStats, SettledTrade};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::HashSet;
use uuid::Uuid;

/// Owns the session's bankroll state and applies settlements to it
#[derive(Debug, Clone)]
pub struct BankrollLedger {
    state: BankrollState,
    stats: SessionStats,
    /// Trade ids already settled
    applied: HashSet<Uuid>,
}

impl BankrollLedger {
    /// Start a session with `initial_balance` on `day`
    pub fn new(initial_balance: Decimal, day: NaiveDate) -> Self {
        Self::from_state(BankrollState::new(initial_balance, day))
    }

    /// Resume from a previously saved state
    pub fn from_state(state: BankrollState) -> Self {
        Self {
            stats: SessionStats::new(state.current_balance),
            state,
            applied: HashSet::new(),
        }
    }

    /// Current state
    pub fn state(&self) -> &BankrollState {
        &self.state
    }

    /// Session totals
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Reset the daily trade counter if `day` starts a new trading day
    ///
    /// Only moves forward: a late settlement stamped with an earlier day
    /// does not rewind the boundary.
    pub fn roll_day(&mut self, day: NaiveDate) -> bool {
        if day <= self.state.day_boundary {
            return false;
        }
        tracing::info!(
            previous = %self.state.day_boundary,
            next = %day,
            trades = self.state.trades_today,
            "New trading day, resetting daily trade count"
        );
        self.state.day_boundary = day;
        self.state.trades_today = 0;
        true
    }

    /// Roll the day forward to `now` and return a read-only snapshot
    pub fn snapshot_at(&mut self, now: DateTime<Utc>) -> BankrollState {
        self.roll_day(now.date_naive());
        self.state.clone()
    }

    /// Apply a settled trade's P&L
    ///
    /// Each trade id is accepted once; a replay returns
    /// [`LedgerError::DuplicateSettlement`] and leaves the state untouched.
    pub fn apply_settlement(&mut self, trade: &SettledTrade) -> Result<BankrollState, LedgerError> {
        if self.applied.contains(&trade.trade_id) {
            tracing::warn!(trade_id = %trade.trade_id, "Duplicate settlement ignored");
            return Err(LedgerError::DuplicateSettlement(trade.trade_id));
        }

        self.roll_day(trade.timestamp.date_naive());

        let state = &mut self.state;
        let previous = state.current_balance;
        let balance = previous + trade.net_pnl;
        if balance < Decimal::ZERO {
            tracing::warn!(
                trade_id = %trade.trade_id,
                %balance,
                "Loss exceeds balance, flooring at zero"
            );
        }
        state.current_balance = balance.max(Decimal::ZERO);
        if state.current_balance > state.peak_balance {
            state.peak_balance = state.current_balance;
        }

        match trade.net_pnl.cmp(&Decimal::ZERO) {
            Ordering::Greater => {
                state.consecutive_wins += 1;
                state.consecutive_losses = 0;
                self.stats.wins += 1;
            }
            Ordering::Less => {
                state.consecutive_losses += 1;
                state.consecutive_wins = 0;
                self.stats.losses += 1;
            }
            Ordering::Equal => {
                self.stats.flats += 1;
            }
        }

        state.trades_today += 1;
        // Only what reached the balance; a floored loss is capped
        self.stats.realized_pnl += state.current_balance - previous;
        self.applied.insert(trade.trade_id);

        tracing::info!(
            trade_id = %trade.trade_id,
            market_id = %trade.market_id,
            net_pnl = %trade.net_pnl,
            balance = %state.current_balance,
            "Settlement applied"
        );

        Ok(state.clone())
    }
}
