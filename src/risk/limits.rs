//! Risk limits and the pre-trade gate

use super::{ConfigError, GateResult, NoTradeReason};
use crate::bankroll::BankrollState;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Session risk limits, immutable once trading starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskLimits {
    /// Minimum edge required to trade
    pub min_edge: Decimal,
    /// Maximum stake as a fraction of current balance
    pub max_bet_fraction: Decimal,
    /// Maximum stake in USDC
    pub max_bet_absolute: Decimal,
    /// Minimum stake in USDC
    pub initial_bet: Decimal,
    /// Maximum fractional decline from peak balance
    pub max_drawdown_fraction: Decimal,
    /// Maximum settled trades per day
    pub daily_trade_limit: u32,
    /// Fraction of full Kelly to stake (0.5 = half Kelly)
    pub kelly_safety_margin: Decimal,
}

impl Default for RiskLimits {
    fn default() -> Self {
        Self {
            min_edge: dec!(0.15),
            max_bet_fraction: dec!(0.10),
            max_bet_absolute: dec!(20),
            initial_bet: dec!(2),
            max_drawdown_fraction: dec!(0.50),
            daily_trade_limit: 50,
            kelly_safety_margin: dec!(0.5),
        }
    }
}

impl RiskLimits {
    /// Reject configurations the engine cannot honour
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_edge < Decimal::ZERO || self.min_edge >= Decimal::ONE {
            return Err(invalid("min_edge", self.min_edge, "must be in [0, 1)"));
        }
        for (field, value) in [
            ("max_bet_fraction", self.max_bet_fraction),
            ("max_drawdown_fraction", self.max_drawdown_fraction),
            ("kelly_safety_margin", self.kelly_safety_margin),
        ] {
            if value <= Decimal::ZERO || value > Decimal::ONE {
                return Err(invalid(field, value, "must be in (0, 1]"));
            }
        }
        if self.initial_bet <= Decimal::ZERO {
            return Err(invalid("initial_bet", self.initial_bet, "must be positive"));
        }
        if self.max_bet_absolute <= Decimal::ZERO {
            return Err(invalid(
                "max_bet_absolute",
                self.max_bet_absolute,
                "must be positive",
            ));
        }
        if self.daily_trade_limit == 0 {
            return Err(invalid(
                "daily_trade_limit",
                Decimal::ZERO,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, value: Decimal, reason: &'static str) -> ConfigError {
    ConfigError::Invalid {
        field,
        value,
        reason,
    }
}

/// Hard stop conditions checked before any sizing
///
/// Checks run in a fixed order and the first failure wins, so identical
/// state always yields the same reason.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskGate;

impl RiskGate {
    /// Create a new risk gate
    pub fn new() -> Self {
        Self
    }

    /// Check a bankroll snapshot against the limits
    pub fn check(&self, bankroll: &BankrollState, limits: &RiskLimits) -> GateResult {
        let drawdown = bankroll.drawdown();
        if drawdown > limits.max_drawdown_fraction {
            tracing::warn!(
                %drawdown,
                limit = %limits.max_drawdown_fraction,
                "Drawdown limit exceeded"
            );
            return GateResult::Blocked(NoTradeReason::DrawdownExceeded);
        }

        if bankroll.trades_today >= limits.daily_trade_limit {
            tracing::warn!(
                trades_today = bankroll.trades_today,
                limit = limits.daily_trade_limit,
                "Daily trade limit reached"
            );
            return GateResult::Blocked(NoTradeReason::DailyLimitReached);
        }

        if bankroll.current_balance <= Decimal::ZERO {
            tracing::warn!(balance = %bankroll.current_balance, "Balance exhausted");
            return GateResult::Blocked(NoTradeReason::InsufficientBalance);
        }

        GateResult::Pass
    }
}
