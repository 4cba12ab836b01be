//! Risk management module
//!
//! Hard stop checks, Kelly sizing, and streak-scaled stake bounds

mod kelly;
mod limits;
mod sizing;
mod types;

pub use kelly::kelly_fraction;
pub use limits::{RiskGate, RiskLimits};
pub use sizing::{streak_multiplier, PositionSizer, Sizing, StakeSizing};
pub use types::{ConfigError, GateResult, NoTradeReason};
