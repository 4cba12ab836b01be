//! Bankroll module
//!
//! Balance, high-water mark, streaks, and daily trade count

mod ledger;
mod shared;
mod types;

pub use ledger::BankrollLedger;
pub use shared::SharedBankroll;
pub use types::{BankrollState, LedgerError, SessionStats, SettledTrade};
