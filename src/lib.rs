//! poly-edge: Edge detection and position sizing for Polymarket prediction markets
//!
//! This library provides the core components for:
//! - Edge evaluation of model probabilities against market prices
//! - Pre-trade risk gate (drawdown, daily cap, balance)
//! - Half-Kelly position sizing with streak scaling and hard caps
//! - Single-writer bankroll ledger with settlement idempotency
//! - Polling cycle orchestration over pluggable collaborators
//! - Paper execution and offline replay
//! - Logging and Prometheus metrics

pub mod backtest;
pub mod bankroll;
pub mod cli;
pub mod config;
pub mod engine;
pub mod execution;
pub mod market;
pub mod risk;
pub mod session;
pub mod signal;
pub mod telemetry;
