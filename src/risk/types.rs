//! Risk management types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a candidate trade produced no instruction
///
/// These are expected outcomes, reported as values rather than errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoTradeReason {
    /// Balance fell further below its peak than the drawdown limit allows
    DrawdownExceeded,
    /// Settled trades today reached the daily cap
    DailyLimitReached,
    /// Balance is zero
    InsufficientBalance,
    /// No side has an edge at or above the minimum
    EdgeTooSmall,
    /// No stake fits between the minimum bet and the caps
    StakeUnaffordable,
}

impl NoTradeReason {
    /// Stable label used in logs and metrics
    pub fn as_str(&self) -> &'static str {
        match self {
            NoTradeReason::DrawdownExceeded => "drawdown_exceeded",
            NoTradeReason::DailyLimitReached => "daily_limit_reached",
            NoTradeReason::InsufficientBalance => "insufficient_balance",
            NoTradeReason::EdgeTooSmall => "edge_too_small",
            NoTradeReason::StakeUnaffordable => "stake_unaffordable",
        }
    }
}

impl std::fmt::Display for NoTradeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of the pre-trade risk gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateResult {
    /// All checks passed
    Pass,
    /// First failing check
    Blocked(NoTradeReason),
}

/// Invalid risk configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {value} ({reason})")]
    Invalid {
        field: &'static str,
        value: Decimal,
        reason: &'static str,
    },
}
