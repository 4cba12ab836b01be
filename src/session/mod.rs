//! Trading session module
//!
//! Runs one polling cycle: gather inputs for each market, decide under the
//! bankroll lock, rank accepted trades, and submit the best.

mod cycle;

pub use cycle::{rank_instructions, CycleReport, SkippedMarket, TradingSession};
