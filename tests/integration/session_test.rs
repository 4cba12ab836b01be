//! Session and ledger scenarios

use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use poly_edge::bankroll::{BankrollLedger, LedgerError, SharedBankroll};
use poly_edge::engine::NoTradeReason;
use poly_edge::execution::PaperExecution;
use poly_edge::market::{MarketQuote, MarketSnapshot, PredictionEstimate, ProbabilityModel};
use poly_edge::risk::RiskLimits;
use poly_edge::session::TradingSession;
use rust_decimal_macros::dec;

struct ConfidentModel;

#[async_trait]
impl ProbabilityModel for ConfidentModel {
    async fn estimate(&self, market_id: &str) -> anyhow::Result<PredictionEstimate> {
        Ok(PredictionEstimate::new(market_id, dec!(0.80), start()).with_confidence(dec!(0.9)))
    }
}

struct EvenQuotes;

#[async_trait]
impl MarketQuote for EvenQuotes {
    async fn quote(&self, market_id: &str) -> anyhow::Result<MarketSnapshot> {
        Ok(MarketSnapshot::new(market_id, dec!(0.50), dec!(250), start()))
    }
}

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 25, 9, 0, 0).unwrap()
}

fn session(limits: RiskLimits) -> TradingSession<ConfidentModel, EvenQuotes, PaperExecution> {
    let ledger = BankrollLedger::new(dec!(200), NaiveDate::from_ymd_opt(2025, 3, 25).unwrap());
    TradingSession::new(
        ConfidentModel,
        EvenQuotes,
        PaperExecution::default(),
        limits,
        SharedBankroll::new(ledger),
    )
}

#[tokio::test]
async fn scenario_daily_cap_resets_next_day() {
    let limits = RiskLimits {
        daily_trade_limit: 2,
        ..RiskLimits::default()
    };
    let session = session(limits);
    let markets = vec!["m".to_string()];

    for _ in 0..2 {
        let report = session.run_cycle(&markets, start()).await;
        let instruction = &report.submitted[0];
        let trade = session.execution().settle(instruction, true, start());
        session.settle(&trade).await.unwrap();
    }

    let report = session.run_cycle(&markets, start()).await;
    assert_eq!(report.decisions[0].reason(), Some(NoTradeReason::DailyLimitReached));
    assert!(report.submitted.is_empty());

    let tomorrow = start() + Duration::days(1);
    let report = session.run_cycle(&markets, tomorrow).await;
    assert_eq!(report.submitted.len(), 1);
}

#[tokio::test]
async fn scenario_losing_streak_shrinks_stakes() {
    let session = session(RiskLimits {
        max_bet_absolute: dec!(100),
        max_bet_fraction: dec!(1),
        kelly_safety_margin: dec!(0.1),
        ..RiskLimits::default()
    });
    let markets = vec!["m".to_string()];

    // Kelly 0.6, 10% of that on $200 = $12
    let report = session.run_cycle(&markets, start()).await;
    let first = report.submitted[0].clone();
    assert_eq!(first.stake, dec!(12));

    let trade = session.execution().settle(&first, false, start());
    let state = session.settle(&trade).await.unwrap();
    assert_eq!(state.current_balance, dec!(188));

    // 0.06 * 188 * 0.9 = 10.152
    let report = session.run_cycle(&markets, start()).await;
    assert_eq!(report.submitted[0].stake, dec!(10.15));
}

#[test]
fn scenario_duplicate_settlement_blocked() {
    tokio_test::block_on(async {
        let session = session(RiskLimits::default());
        let report = session.run_cycle(&["m".to_string()], start()).await;
        let trade = session.execution().settle(&report.submitted[0], true, start());

        session.settle(&trade).await.unwrap();
        let err = session.settle(&trade).await.unwrap_err();
        assert_eq!(err, LedgerError::DuplicateSettlement(trade.trade_id));

        let (state, stats) = session.bankroll().report().await;
        assert_eq!(state.trades_today, 1);
        assert_eq!(stats.wins, 1);
    });
}

#[tokio::test]
async fn scenario_unsettled_market_not_resubmitted() {
    let session = session(RiskLimits::default());
    let markets = vec!["m".to_string()];

    let mut submitted = Vec::new();
    for _ in 0..120 {
        let report = session.run_cycle(&markets, start()).await;
        submitted.extend(report.submitted);
    }

    let total: rust_decimal::Decimal = submitted.iter().map(|i| i.stake).sum();
    assert_eq!(submitted.len(), 1);
    assert_eq!(total, dec!(20));
    assert_eq!(session.execution().submitted().await.len(), 1);
}

#[tokio::test]
async fn scenario_open_instructions_count_against_limits() {
    let limits = RiskLimits {
        daily_trade_limit: 3,
        ..RiskLimits::default()
    };
    let session = session(limits).with_max_trades_per_cycle(10);
    let markets: Vec<String> = (1..=5).map(|i| format!("m{}", i)).collect();

    // Only three fit under the daily limit
    let first = session.run_cycle(&markets, start()).await;
    assert_eq!(first.submitted.len(), 3);
    assert_eq!(first.deferred.len(), 2);

    // Nothing settled: the three open trades use up the day
    let second = session.run_cycle(&markets, start()).await;
    assert_eq!(second.open.len(), 3);
    assert!(second.submitted.is_empty());
    for decision in &second.decisions {
        assert_eq!(decision.reason(), Some(NoTradeReason::DailyLimitReached));
    }
}

#[tokio::test]
async fn scenario_open_stake_leaves_sizing_balance() {
    let session = session(RiskLimits::default());

    // $200 balance, cap 10% = $20
    let first = session.run_cycle(&["a".to_string()], start()).await;
    assert_eq!(first.submitted[0].stake, dec!(20));

    // $20 committed to "a": sized against $180, cap $18
    let markets = vec!["a".to_string(), "b".to_string()];
    let second = session.run_cycle(&markets, start()).await;
    assert_eq!(second.open, vec!["a".to_string()]);
    assert_eq!(second.submitted[0].market_id, "b");
    assert_eq!(second.submitted[0].stake, dec!(18));
    assert_eq!(second.submitted[0].rationale.balance, dec!(180));
}
