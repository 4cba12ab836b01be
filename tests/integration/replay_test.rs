//! Replay from recorded rounds

use poly_edge::backtest::{ReplayConfig, ReplayRunner, RoundStream};
use poly_edge::risk::RiskLimits;
use rust_decimal_macros::dec;
use std::io::Write;

fn round(id: &str, estimate: &str, implied: &str, hour: u32, outcome: &str) -> String {
    format!(
        r#"{{"estimate":{{"market_id":"{id}","estimated_probability":"{estimate}","timestamp":"2025-03-25T{hour:02}:00:00Z"}},"quote":{{"market_id":"{id}","implied_probability":"{implied}","available_liquidity":"500","timestamp":"2025-03-25T{hour:02}:00:00Z"}},"outcome":{outcome}}}"#
    )
}

#[test]
fn test_replay_file_end_to_end() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# recorded session").unwrap();
    // $10 YES at 0.50, wins $10
    writeln!(file, "{}", round("a", "0.70", "0.50", 9, "true")).unwrap();
    // Edge 0.05
    writeln!(file, "{}", round("b", "0.55", "0.50", 10, "false")).unwrap();
    // Malformed estimate
    writeln!(file, "{}", round("c", "1.20", "0.50", 11, "true")).unwrap();
    // Unresolved trade
    writeln!(file, "{}", round("d", "0.90", "0.60", 12, "null")).unwrap();

    let runner = ReplayRunner::new(ReplayConfig::default(), RiskLimits::default());
    let summary = runner.run(RoundStream::open(file.path()).unwrap()).unwrap();

    assert_eq!(summary.rounds, 4);
    assert_eq!(summary.trades, 2);
    assert_eq!(summary.settled, 1);
    assert_eq!(summary.invalid_inputs, 1);
    assert_eq!(summary.verdicts.get("edge_too_small"), Some(&1));
    assert_eq!(summary.final_state.current_balance, dec!(110));
    assert_eq!(summary.final_state.trades_today, 1);
    assert_eq!(summary.max_drawdown, dec!(0));
}

#[test]
fn test_replay_with_fees_and_drawdown_stop() {
    let limits = RiskLimits {
        max_drawdown_fraction: dec!(0.05),
        ..RiskLimits::default()
    };
    let config = ReplayConfig {
        initial_balance: dec!(100),
        fee_rate: dec!(0.01),
    };

    let mut file = tempfile::NamedTempFile::new().unwrap();
    // $10 YES at 0.50 loses $10 plus $0.10 fee
    writeln!(file, "{}", round("a", "0.70", "0.50", 9, "false")).unwrap();
    // Drawdown now 10.1%, blocked
    writeln!(file, "{}", round("b", "0.70", "0.50", 10, "true")).unwrap();

    let summary = ReplayRunner::new(config, limits)
        .run(RoundStream::open(file.path()).unwrap())
        .unwrap();

    assert_eq!(summary.final_state.current_balance, dec!(89.9));
    assert_eq!(summary.verdicts.get("drawdown_exceeded"), Some(&1));
    assert_eq!(summary.stats.losses, 1);
}
