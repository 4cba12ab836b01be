//! Configuration types for poly-edge

use crate::risk::RiskLimits;
use crate::telemetry::LogFormat;
use anyhow::Context;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub risk: RiskLimits,
    #[serde(default)]
    pub bankroll: BankrollConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Starting bankroll configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankrollConfig {
    /// Balance at session start (USDC)
    #[serde(default = "default_initial_balance")]
    pub initial_balance: Decimal,
}

fn default_initial_balance() -> Decimal {
    dec!(100)
}

impl Default for BankrollConfig {
    fn default() -> Self {
        Self {
            initial_balance: default_initial_balance(),
        }
    }
}

/// Polling cycle configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Instructions submitted per cycle, best first
    #[serde(default = "default_max_trades_per_cycle")]
    pub max_trades_per_cycle: usize,
    /// Seconds allowed to fetch one market's estimate and quote
    #[serde(default = "default_market_timeout_secs")]
    pub market_timeout_secs: u64,
}

fn default_max_trades_per_cycle() -> usize {
    1
}

fn default_market_timeout_secs() -> u64 {
    15
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_trades_per_cycle: default_max_trades_per_cycle(),
            market_timeout_secs: default_market_timeout_secs(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Prometheus exporter port; disabled when absent
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.risk.validate()?;
        Ok(config)
    }

    /// Load configuration, using defaults only when the file does not exist
    ///
    /// Parse and validation errors are returned rather than replaced by
    /// defaults.
    pub fn load_or_default(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))
    }
}
