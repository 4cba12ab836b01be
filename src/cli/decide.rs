//! Decide command implementation

use super::OutputFormat;
use crate::bankroll::BankrollState;
use crate::config::Config;
use crate::engine::{Decision, DecisionEngine};
use crate::market::{MarketSnapshot, PredictionEstimate};
use chrono::Utc;
use clap::Args;
use rust_decimal::Decimal;

#[derive(Args, Debug)]
pub struct DecideArgs {
    /// Market identifier
    #[arg(long)]
    pub market_id: String,

    /// Model probability of YES
    #[arg(long)]
    pub estimate: Decimal,

    /// Market YES price
    #[arg(long)]
    pub price: Decimal,

    /// Model confidence in (0, 1)
    #[arg(long)]
    pub confidence: Option<Decimal>,

    /// Liquidity at the quoted price
    #[arg(long, default_value = "0")]
    pub liquidity: Decimal,

    /// Current balance (defaults to the configured initial balance)
    #[arg(long)]
    pub balance: Option<Decimal>,

    /// Peak balance (defaults to the current balance)
    #[arg(long)]
    pub peak: Option<Decimal>,

    /// Consecutive wins
    #[arg(long, default_value = "0")]
    pub wins: u32,

    /// Consecutive losses
    #[arg(long, default_value = "0")]
    pub losses: u32,

    /// Trades already settled today
    #[arg(long, default_value = "0")]
    pub trades_today: u32,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl DecideArgs {
    /// Bankroll snapshot described by the arguments
    pub fn bankroll(&self, config: &Config) -> BankrollState {
        let balance = self.balance.unwrap_or(config.bankroll.initial_balance);
        BankrollState {
            current_balance: balance,
            peak_balance: self.peak.unwrap_or(balance).max(balance),
            consecutive_wins: self.wins,
            consecutive_losses: self.losses,
            trades_today: self.trades_today,
            day_boundary: Utc::now().date_naive(),
        }
    }

    /// Run the decision and render it
    pub fn render(&self, config: &Config) -> anyhow::Result<String> {
        let now = Utc::now();
        let mut estimate = PredictionEstimate::new(&self.market_id, self.estimate, now);
        estimate.confidence = self.confidence;
        let quote = MarketSnapshot::new(&self.market_id, self.price, self.liquidity, now);

        let decision =
            DecisionEngine::new().decide(&estimate, &quote, &self.bankroll(config), &config.risk)?;

        Ok(match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(&decision)?,
            OutputFormat::Table => format_decision(&decision),
        })
    }

    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        tracing::debug!(market_id = %self.market_id, "Evaluating market");
        println!("{}", self.render(config)?);
        Ok(())
    }
}

fn format_decision(decision: &Decision) -> String {
    match decision {
        Decision::Trade(instruction) => {
            let sizing = &instruction.rationale.sizing;
            format!(
                "TRADE {} {}\n  stake:       {:.2}\n  price:       {}\n  edge:        {:.2}%\n  kelly:       {:.4}\n  streak mult: {}\n  bounds:      [{:.2}, {:.2}]",
                instruction.market_id,
                instruction.side,
                instruction.stake,
                instruction.limit_price,
                instruction.expected_edge * Decimal::ONE_HUNDRED,
                sizing.kelly_fraction,
                sizing.streak_multiplier,
                sizing.floor,
                sizing.cap,
            )
        }
        Decision::NoTrade(verdict) => format!("NO TRADE {}: {}", verdict.market_id, verdict.reason),
    }
}
