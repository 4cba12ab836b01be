//! Replay analytics and reporting

use crate::bankroll::{BankrollState, SessionStats};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;

/// Replay results
#[derive(Debug, Clone, Serialize)]
pub struct ReplaySummary {
    /// Rounds read
    pub rounds: usize,
    /// Instructions produced
    pub trades: usize,
    /// Trades settled from a recorded outcome
    pub settled: usize,
    /// Rounds rejected as invalid input
    pub invalid_inputs: usize,
    /// No-trade verdicts by reason
    pub verdicts: BTreeMap<String, usize>,
    /// Largest drawdown seen after any settlement
    pub max_drawdown: Decimal,
    /// Bankroll after the last round
    pub final_state: BankrollState,
    /// Session totals
    pub stats: SessionStats,
}

impl ReplaySummary {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let mut verdicts = String::new();
        for (reason, count) in &self.verdicts {
            verdicts.push_str(&format!("{:<18}{}\n", format!("{}:", reason), count));
        }
        if verdicts.is_empty() {
            verdicts.push_str("(none)\n");
        }

        format!(
            r#"
══════════════════════════════════════════════════════
               REPLAY RESULTS
══════════════════════════════════════════════════════

PERFORMANCE
───────────────────────────────────────────────────────
Final Balance:    {:.2}
Net P&L:          {:+.2} ({:+.2}%)
Max Drawdown:     {:.2}%
Win Rate:         {:.1}%

ACTIVITY
───────────────────────────────────────────────────────
Rounds:           {}
Trades:           {}
Settled:          {}
Invalid Inputs:   {}

NO-TRADE VERDICTS
───────────────────────────────────────────────────────
{}══════════════════════════════════════════════════════
"#,
            self.final_state.current_balance,
            self.stats.realized_pnl,
            self.stats.return_pct() * dec!(100),
            self.max_drawdown * dec!(100),
            self.stats.win_rate() * dec!(100),
            self.rounds,
            self.trades,
            self.settled,
            self.invalid_inputs,
            verdicts,
        )
    }
}
