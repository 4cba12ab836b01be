//! Polling cycle

use crate::bankroll::{BankrollState, LedgerError, SettledTrade, SharedBankroll};
use crate::config::SessionConfig;
use crate::engine::{Decision, DecisionEngine, TradeInstruction};
use crate::execution::Execution;
use crate::market::{MarketQuote, ProbabilityModel};
use crate::risk::RiskLimits;
use crate::telemetry;
use chrono::{DateTime, Utc};
use futures_util::future::join_all;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Default time allowed to fetch one market's estimate and quote
pub const DEFAULT_MARKET_TIMEOUT: Duration = Duration::from_secs(15);

/// A market dropped from the cycle before a decision was made
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedMarket {
    /// Market identifier
    pub market_id: String,
    /// Collaborator failure, timeout, or invalid input
    pub error: String,
}

/// Outcome of one cycle
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    /// Every decision reached, in market order
    pub decisions: Vec<Decision>,
    /// Instructions handed to the execution layer
    pub submitted: Vec<TradeInstruction>,
    /// Accepted instructions beyond the per-cycle or daily limit
    pub deferred: Vec<TradeInstruction>,
    /// Instructions the execution layer refused
    pub failed: Vec<TradeInstruction>,
    /// Markets with unusable inputs
    pub skipped: Vec<SkippedMarket>,
    /// Markets not evaluated because an earlier instruction is unsettled
    pub open: Vec<String>,
}

/// Submitted but unsettled instructions, as seen at the start of a cycle
#[derive(Debug, Default)]
struct Exposure {
    markets: HashSet<String>,
    stake: Decimal,
    count: u32,
}

impl Exposure {
    /// Bankroll with open stakes already committed: the stake leaves the
    /// balance and the trade counts toward today's limit
    fn commit(&self, state: &BankrollState) -> BankrollState {
        let mut committed = state.clone();
        committed.current_balance = (state.current_balance - self.stake).max(Decimal::ZERO);
        committed.trades_today = state.trades_today.saturating_add(self.count);
        committed
    }
}

/// Order instructions best first: `edge × confidence` descending, then
/// market id for a stable order
pub fn rank_instructions(instructions: &mut [TradeInstruction]) {
    instructions.sort_by(|a, b| match b.score().cmp(&a.score()) {
        Ordering::Equal => a.market_id.cmp(&b.market_id),
        other => other,
    });
}

/// Session wiring the engine to its collaborators
pub struct TradingSession<P, Q, E> {
    model: P,
    quotes: Q,
    execution: E,
    engine: DecisionEngine,
    limits: RiskLimits,
    bankroll: SharedBankroll,
    max_trades_per_cycle: usize,
    market_timeout: Duration,
    /// Submitted instructions awaiting settlement, by instruction id
    open: Mutex<HashMap<Uuid, TradeInstruction>>,
}

impl<P, Q, E> TradingSession<P, Q, E>
where
    P: ProbabilityModel,
    Q: MarketQuote,
    E: Execution,
{
    /// Create a new session
    pub fn new(
        model: P,
        quotes: Q,
        execution: E,
        limits: RiskLimits,
        bankroll: SharedBankroll,
    ) -> Self {
        Self {
            model,
            quotes,
            execution,
            engine: DecisionEngine::new(),
            limits,
            bankroll,
            max_trades_per_cycle: 1,
            market_timeout: DEFAULT_MARKET_TIMEOUT,
            open: Mutex::new(HashMap::new()),
        }
    }

    /// Apply the `[session]` configuration section
    pub fn with_config(self, config: &SessionConfig) -> Self {
        self.with_max_trades_per_cycle(config.max_trades_per_cycle)
            .with_market_timeout(Duration::from_secs(config.market_timeout_secs))
    }

    /// Set how many instructions are submitted per cycle
    pub fn with_max_trades_per_cycle(mut self, max: usize) -> Self {
        self.max_trades_per_cycle = max;
        self
    }

    /// Set the time allowed to fetch one market's inputs
    pub fn with_market_timeout(mut self, timeout: Duration) -> Self {
        self.market_timeout = timeout;
        self
    }

    /// Shared bankroll handle
    pub fn bankroll(&self) -> &SharedBankroll {
        &self.bankroll
    }

    /// Execution collaborator
    pub fn execution(&self) -> &E {
        &self.execution
    }

    /// Instructions submitted by this session and not yet settled
    pub async fn open_instructions(&self) -> Vec<TradeInstruction> {
        self.open.lock().await.values().cloned().collect()
    }

    /// Run one polling cycle over `market_ids`
    ///
    /// Markets are fetched concurrently. A market with an unsettled
    /// instruction is not evaluated again until that instruction settles.
    pub async fn run_cycle(&self, market_ids: &[String], now: DateTime<Utc>) -> CycleReport {
        let mut report = CycleReport::default();
        let exposure = self.exposure().await;

        let mut candidates = Vec::with_capacity(market_ids.len());
        for market_id in market_ids {
            if exposure.markets.contains(market_id) {
                tracing::debug!(%market_id, "Instruction still open, not re-evaluating");
                report.open.push(market_id.clone());
            } else {
                candidates.push(market_id);
            }
        }

        let fetches = candidates
            .iter()
            .map(|market_id| self.decide_market(market_id, &exposure, now));
        let outcomes = join_all(fetches).await;

        for (market_id, outcome) in candidates.into_iter().zip(outcomes) {
            match outcome {
                Ok(decision) => {
                    telemetry::record_decision(&decision);
                    report.decisions.push(decision);
                }
                Err(error) => {
                    tracing::warn!(%market_id, %error, "Skipping market");
                    report.skipped.push(SkippedMarket {
                        market_id: market_id.clone(),
                        error: error.to_string(),
                    });
                }
            }
        }

        let mut accepted: Vec<TradeInstruction> = report
            .decisions
            .iter()
            .filter_map(|d| d.instruction().cloned())
            .collect();
        rank_instructions(&mut accepted);

        // Never submit past the daily limit within a single cycle
        let committed_today = self
            .bankroll
            .with_snapshot(now, |state| exposure.commit(state).trades_today)
            .await;
        let room = self.limits.daily_trade_limit.saturating_sub(committed_today) as usize;
        let take = self.max_trades_per_cycle.min(room).min(accepted.len());

        let deferred = accepted.split_off(take);
        for instruction in accepted {
            match self.execution.submit(&instruction).await {
                Ok(()) => {
                    self.open.lock().await.insert(instruction.id, instruction.clone());
                    report.submitted.push(instruction);
                }
                Err(error) => {
                    tracing::error!(id = %instruction.id, %error, "Submission failed");
                    report.failed.push(instruction);
                }
            }
        }
        report.deferred = deferred;

        tracing::info!(
            markets = market_ids.len(),
            decisions = report.decisions.len(),
            submitted = report.submitted.len(),
            deferred = report.deferred.len(),
            skipped = report.skipped.len(),
            open = report.open.len(),
            "Cycle complete"
        );

        report
    }

    async fn exposure(&self) -> Exposure {
        let open = self.open.lock().await;
        Exposure {
            markets: open.values().map(|i| i.market_id.clone()).collect(),
            stake: open.values().map(|i| i.stake).sum(),
            count: u32::try_from(open.len()).unwrap_or(u32::MAX),
        }
    }

    async fn decide_market(
        &self,
        market_id: &str,
        exposure: &Exposure,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Decision> {
        let fetch = async {
            tokio::try_join!(self.model.estimate(market_id), self.quotes.quote(market_id))
        };
        let (estimate, quote) = tokio::time::timeout(self.market_timeout, fetch)
            .await
            .map_err(|_| anyhow::anyhow!("timed out after {:?}", self.market_timeout))??;

        let decision = self
            .bankroll
            .with_snapshot(now, |state| {
                self.engine.decide(&estimate, &quote, &exposure.commit(state), &self.limits)
            })
            .await;

        decision.map_err(|e| {
            telemetry::record_invalid_input();
            e.into()
        })
    }

    /// Apply a settlement reported by the execution layer and release the
    /// market for the next cycle
    pub async fn settle(&self, trade: &SettledTrade) -> Result<BankrollState, LedgerError> {
        let state = self.bankroll.settle(trade).await?;
        if self.open.lock().await.remove(&trade.trade_id).is_none() {
            tracing::debug!(
                trade_id = %trade.trade_id,
                "Settled trade was not opened by this session"
            );
        }
        Ok(state)
    }
}
