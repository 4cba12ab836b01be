//! Position sizing
//!
//! Half-Kelly stake scaled by the current win/loss streak, then clamped
//! between the minimum bet and the per-trade caps.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{kelly_fraction, RiskLimits};
use crate::bankroll::BankrollState;
use crate::signal::EdgeResult;

/// Multiplier change per consecutive win or loss
const STREAK_STEP: Decimal = dec!(0.1);
/// Streak length beyond which the multiplier stops changing
const STREAK_CAP: u32 = 5;
/// Lowest multiplier after a losing streak
const LOSS_FLOOR: Decimal = dec!(0.5);

/// Breakdown of an accepted stake, kept for the audit trail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeSizing {
    /// Final stake in USDC
    pub stake: Decimal,
    /// Full Kelly fraction before the safety margin
    pub kelly_fraction: Decimal,
    /// Stake after the safety margin, before streak scaling
    pub raw_stake: Decimal,
    /// Streak multiplier applied to the raw stake
    pub streak_multiplier: Decimal,
    /// Lower clamp bound (minimum bet)
    pub floor: Decimal,
    /// Upper clamp bound
    pub cap: Decimal,
}

/// Sizing outcome
#[derive(Debug, Clone, PartialEq)]
pub enum Sizing {
    /// Stake within bounds
    Stake(StakeSizing),
    /// Minimum bet exceeds the cap
    Unaffordable { floor: Decimal, cap: Decimal },
}

/// Multiplier for the current streak
///
/// Wins: 1 + 0.1 * min(wins, 5). Losses: max(1 - 0.1 * min(losses, 5), 0.5).
pub fn streak_multiplier(consecutive_wins: u32, consecutive_losses: u32) -> Decimal {
    if consecutive_wins > 0 {
        Decimal::ONE + STREAK_STEP * Decimal::from(consecutive_wins.min(STREAK_CAP))
    } else if consecutive_losses > 0 {
        (Decimal::ONE - STREAK_STEP * Decimal::from(consecutive_losses.min(STREAK_CAP)))
            .max(LOSS_FLOOR)
    } else {
        Decimal::ONE
    }
}

/// Kelly-based position sizer
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionSizer;

impl PositionSizer {
    /// Create a new sizer
    pub fn new() -> Self {
        Self
    }

    /// Size a stake for an edge that already cleared the gate and threshold
    pub fn size(
        &self,
        edge: &EdgeResult,
        bankroll: &BankrollState,
        limits: &RiskLimits,
    ) -> Sizing {
        let balance = bankroll.current_balance;

        let floor = limits.initial_bet;
        let cap = limits.max_bet_absolute.min(limits.max_bet_fraction * balance);
        if floor > cap {
            return Sizing::Unaffordable { floor, cap };
        }

        let kelly = kelly_fraction(edge.model_probability, edge.market_price);
        let raw_stake = kelly * balance * limits.kelly_safety_margin;
        let multiplier = streak_multiplier(bankroll.consecutive_wins, bankroll.consecutive_losses);

        // Whole cents, rounded toward zero
        let adjusted =
            (raw_stake * multiplier).round_dp_with_strategy(2, RoundingStrategy::ToZero);
        let stake = adjusted.max(floor).min(cap);

        Sizing::Stake(StakeSizing {
            stake,
            kelly_fraction: kelly,
            raw_stake,
            streak_multiplier: multiplier,
            floor,
            cap,
        })
    }
}
