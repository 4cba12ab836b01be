//! Replay runner

use super::{ReplayConfig, ReplayRound, ReplaySummary};
use crate::bankroll::{BankrollLedger, SettledTrade};
use crate::engine::{Decision, DecisionEngine};
use crate::execution::paper_pnl;
use crate::risk::RiskLimits;
use crate::signal::Side;
use chrono::Utc;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Runs recorded rounds through the engine against a private ledger
pub struct ReplayRunner {
    config: ReplayConfig,
    limits: RiskLimits,
    engine: DecisionEngine,
}

impl ReplayRunner {
    /// Create a new runner
    pub fn new(config: ReplayConfig, limits: RiskLimits) -> Self {
        Self {
            config,
            limits,
            engine: DecisionEngine::new(),
        }
    }

    /// Run the replay
    ///
    /// Rounds should be in time order; the ledger's trading day starts at
    /// the first round's quote date.
    pub fn run<I>(&self, rounds: I) -> anyhow::Result<ReplaySummary>
    where
        I: IntoIterator<Item = anyhow::Result<ReplayRound>>,
    {
        let mut ledger: Option<BankrollLedger> = None;
        let mut rounds_read = 0;
        let mut trades = 0;
        let mut settled = 0;
        let mut invalid_inputs = 0;
        let mut verdicts: BTreeMap<String, usize> = BTreeMap::new();
        let mut max_drawdown = Decimal::ZERO;

        for round in rounds {
            let round = round?;
            rounds_read += 1;

            let now = round.quote.timestamp;
            let ledger = ledger.get_or_insert_with(|| {
                BankrollLedger::new(self.config.initial_balance, now.date_naive())
            });
            let snapshot = ledger.snapshot_at(now);

            let decision =
                match self
                    .engine
                    .decide(&round.estimate, &round.quote, &snapshot, &self.limits)
                {
                    Ok(decision) => decision,
                    Err(error) => {
                        tracing::warn!(market_id = %round.quote.market_id, %error, "Invalid round");
                        invalid_inputs += 1;
                        continue;
                    }
                };

            let instruction = match decision {
                Decision::Trade(instruction) => instruction,
                Decision::NoTrade(verdict) => {
                    *verdicts.entry(verdict.reason.to_string()).or_default() += 1;
                    continue;
                }
            };
            trades += 1;

            let Some(yes_won) = round.outcome else {
                continue;
            };
            let won = match instruction.side {
                Side::Yes => yes_won,
                Side::No => !yes_won,
            };
            let net_pnl = paper_pnl(
                instruction.stake,
                instruction.limit_price,
                won,
                self.config.fee_rate,
            );
            let state = ledger.apply_settlement(&SettledTrade::new(
                instruction.id,
                instruction.market_id,
                net_pnl,
                now,
            ))?;
            settled += 1;
            max_drawdown = max_drawdown.max(state.drawdown());
        }

        let ledger = ledger.unwrap_or_else(|| {
            BankrollLedger::new(self.config.initial_balance, Utc::now().date_naive())
        });

        Ok(ReplaySummary {
            rounds: rounds_read,
            trades,
            settled,
            invalid_inputs,
            verdicts,
            max_drawdown,
            final_state: ledger.state().clone(),
            stats: ledger.stats().clone(),
        })
    }
}
