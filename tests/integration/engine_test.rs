//! Decision engine scenarios

use chrono::{NaiveDate, Utc};
use poly_edge::bankroll::BankrollState;
use poly_edge::engine::{Decision, DecisionEngine, NoTradeReason};
use poly_edge::market::{MarketSnapshot, PredictionEstimate};
use poly_edge::risk::RiskLimits;
use poly_edge::signal::{EdgeEvaluator, Side};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn inputs(estimate: Decimal, implied: Decimal) -> (PredictionEstimate, MarketSnapshot) {
    let now = Utc::now();
    (
        PredictionEstimate::new("scenario", estimate, now),
        MarketSnapshot::new("scenario", implied, dec!(5000), now),
    )
}

fn bankroll(balance: Decimal, peak: Decimal) -> BankrollState {
    BankrollState {
        current_balance: balance,
        peak_balance: peak,
        consecutive_wins: 0,
        consecutive_losses: 0,
        trades_today: 0,
        day_boundary: NaiveDate::from_ymd_opt(2025, 3, 25).unwrap(),
    }
}

fn decide(estimate: Decimal, implied: Decimal, state: &BankrollState) -> Decision {
    let (estimate, quote) = inputs(estimate, implied);
    DecisionEngine::new()
        .decide(&estimate, &quote, state, &RiskLimits::default())
        .unwrap()
}

#[test]
fn scenario_equal_probabilities_have_no_edge() {
    let evaluator = EdgeEvaluator::new();
    for cents in 1..100 {
        let p = Decimal::new(cents, 2);
        let (estimate, quote) = inputs(p, p);
        let result = evaluator.evaluate(&estimate, &quote).unwrap();
        assert_eq!(result.side, None);
        assert_eq!(result.edge, dec!(0));
    }
}

#[test]
fn scenario_small_edges_rejected_regardless_of_bankroll() {
    let states = [
        bankroll(dec!(100), dec!(100)),
        bankroll(dec!(5000), dec!(5000)),
        BankrollState {
            consecutive_wins: 5,
            ..bankroll(dec!(300), dec!(320))
        },
    ];
    for state in &states {
        for (estimate, implied) in [
            (dec!(0.64), dec!(0.50)),
            (dec!(0.36), dec!(0.50)),
            (dec!(0.20), dec!(0.10)),
        ] {
            let decision = decide(estimate, implied, state);
            assert_eq!(decision.reason(), Some(NoTradeReason::EdgeTooSmall));
        }
    }
}

#[test]
fn scenario_stake_always_within_bounds() {
    let limits = RiskLimits::default();
    for balance in [dec!(20), dec!(45), dec!(100), dec!(180), dec!(1000), dec!(25000)] {
        for (estimate, implied) in [
            (dec!(0.70), dec!(0.50)),
            (dec!(0.95), dec!(0.60)),
            (dec!(0.10), dec!(0.40)),
            (dec!(0.40), dec!(0.20)),
        ] {
            for (wins, losses) in [(0, 0), (3, 0), (0, 4), (7, 0)] {
                let state = BankrollState {
                    consecutive_wins: wins,
                    consecutive_losses: losses,
                    ..bankroll(balance, balance)
                };
                if let Decision::Trade(instruction) = decide(estimate, implied, &state) {
                    let cap = limits
                        .max_bet_absolute
                        .min(limits.max_bet_fraction * balance);
                    assert!(instruction.stake >= limits.initial_bet);
                    assert!(instruction.stake <= cap);
                }
            }
        }
    }
}

#[test]
fn scenario_drawdown_boundary() {
    // Exactly 50% below peak is allowed
    let decision = decide(dec!(0.70), dec!(0.50), &bankroll(dec!(100), dec!(200)));
    assert!(matches!(decision, Decision::Trade(_)));

    let decision = decide(dec!(0.70), dec!(0.50), &bankroll(dec!(99), dec!(200)));
    assert_eq!(decision.reason(), Some(NoTradeReason::DrawdownExceeded));
}

#[test]
fn scenario_drawdown_reported_before_daily_limit() {
    let state = BankrollState {
        trades_today: 50,
        ..bankroll(dec!(40), dec!(200))
    };
    let decision = decide(dec!(0.70), dec!(0.50), &state);
    assert_eq!(decision.reason(), Some(NoTradeReason::DrawdownExceeded));
}

#[test]
fn scenario_daily_limit_blocks_huge_edge() {
    let state = BankrollState {
        trades_today: 50,
        ..bankroll(dec!(100), dec!(100))
    };
    let decision = decide(dec!(0.99), dec!(0.49), &state);
    assert_eq!(decision.reason(), Some(NoTradeReason::DailyLimitReached));
}

#[test]
fn scenario_yes_at_even_odds() {
    let decision = decide(dec!(0.70), dec!(0.50), &bankroll(dec!(100), dec!(100)));
    let instruction = decision.instruction().expect("trade");

    assert_eq!(instruction.side, Side::Yes);
    assert_eq!(instruction.expected_edge, dec!(0.20));
    assert_eq!(instruction.rationale.sizing.kelly_fraction, dec!(0.4));
    // Half Kelly is 20% of balance, capped at 10%
    assert_eq!(instruction.rationale.sizing.raw_stake, dec!(20));
    assert_eq!(instruction.stake, dec!(10));
}

#[test]
fn scenario_decisions_are_deterministic() {
    let state = bankroll(dec!(250), dec!(300));
    let (estimate, quote) = inputs(dec!(0.25), dec!(0.45));
    let engine = DecisionEngine::new();
    let limits = RiskLimits::default();

    let first = engine.decide(&estimate, &quote, &state, &limits).unwrap();
    let second = engine.decide(&estimate, &quote, &state, &limits).unwrap();

    let (a, b) = (first.instruction().unwrap(), second.instruction().unwrap());
    assert_eq!(a.side, b.side);
    assert_eq!(a.stake, b.stake);
    assert_eq!(a.rationale, b.rationale);
}
