//! Replay command implementation

use super::OutputFormat;
use crate::backtest::{ReplayConfig, ReplayRunner, RoundStream};
use crate::config::Config;
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// JSON lines file of recorded rounds
    #[arg(long)]
    pub input: PathBuf,

    /// Starting balance (defaults to the configured initial balance)
    #[arg(long)]
    pub capital: Option<Decimal>,

    /// Fee rate charged on each stake
    #[arg(long, default_value = "0")]
    pub fee_rate: Decimal,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl ReplayArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        tracing::info!("Replaying rounds from {:?}...", self.input);

        let replay_config = ReplayConfig {
            initial_balance: self.capital.unwrap_or(config.bankroll.initial_balance),
            fee_rate: self.fee_rate,
        };
        let runner = ReplayRunner::new(replay_config, config.risk.clone());
        let summary = runner.run(RoundStream::open(&self.input)?)?;

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
            OutputFormat::Table => println!("{}", summary.format_table()),
        }
        Ok(())
    }
}
