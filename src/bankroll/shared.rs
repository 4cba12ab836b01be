//! Shared bankroll handle
//!
//! Decisions read the bankroll and settlements write it under the same
//! lock, so a decision never sees a half-applied settlement.

use super::{BankrollLedger, BankrollState, LedgerError, SessionStats, SettledTrade};
use crate::telemetry;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cloneable handle to the session ledger
#[derive(Debug, Clone)]
pub struct SharedBankroll {
    ledger: Arc<Mutex<BankrollLedger>>,
}

impl SharedBankroll {
    /// Wrap a ledger
    pub fn new(ledger: BankrollLedger) -> Self {
        Self {
            ledger: Arc::new(Mutex::new(ledger)),
        }
    }

    /// Run `f` on a day-rolled snapshot while holding the ledger lock
    pub async fn with_snapshot<T>(
        &self,
        now: DateTime<Utc>,
        f: impl FnOnce(&BankrollState) -> T,
    ) -> T {
        let mut ledger = self.ledger.lock().await;
        let snapshot = ledger.snapshot_at(now);
        f(&snapshot)
    }

    /// Day-rolled snapshot
    pub async fn snapshot(&self, now: DateTime<Utc>) -> BankrollState {
        self.with_snapshot(now, BankrollState::clone).await
    }

    /// Apply a settlement
    pub async fn settle(&self, trade: &SettledTrade) -> Result<BankrollState, LedgerError> {
        let mut ledger = self.ledger.lock().await;
        let state = ledger.apply_settlement(trade)?;
        telemetry::record_settlement(trade.net_pnl);
        telemetry::record_bankroll(&state);
        Ok(state)
    }

    /// Current state and session totals
    pub async fn report(&self) -> (BankrollState, SessionStats) {
        let ledger = self.ledger.lock().await;
        (ledger.state().clone(), ledger.stats().clone())
    }
}
