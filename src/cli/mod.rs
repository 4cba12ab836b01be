//! CLI interface for poly-edge
//!
//! Provides subcommands for:
//! - `decide`: One-shot decision for a single market
//! - `replay`: Replay recorded rounds with paper settlement
//! - `config`: Show effective configuration

mod decide;
mod replay;

pub use decide::DecideArgs;
pub use replay::ReplayArgs;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "poly-edge")]
#[command(about = "Edge detection and Kelly position sizing for Polymarket prediction markets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decide on a single market
    Decide(DecideArgs),
    /// Replay recorded rounds with paper settlement
    Replay(ReplayArgs),
    /// Show effective configuration
    Config,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
