//! Benchmarks for the decision pipeline

use chrono::{NaiveDate, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use poly_edge::bankroll::BankrollState;
use poly_edge::engine::DecisionEngine;
use poly_edge::market::{MarketSnapshot, PredictionEstimate};
use poly_edge::risk::RiskLimits;
use rust_decimal_macros::dec;

fn benchmark_decide_trade(c: &mut Criterion) {
    let engine = DecisionEngine::new();
    let now = Utc::now();
    let estimate = PredictionEstimate::new("bench", dec!(0.72), now);
    let quote = MarketSnapshot::new("bench", dec!(0.41), dec!(1000), now);
    let bankroll = BankrollState::new(dec!(500), NaiveDate::from_ymd_opt(2025, 3, 25).unwrap());
    let limits = RiskLimits::default();

    c.bench_function("decide_trade", |b| {
        b.iter(|| engine.decide(black_box(&estimate), black_box(&quote), &bankroll, &limits))
    });
}

fn benchmark_decide_no_edge(c: &mut Criterion) {
    let engine = DecisionEngine::new();
    let now = Utc::now();
    let estimate = PredictionEstimate::new("bench", dec!(0.50), now);
    let quote = MarketSnapshot::new("bench", dec!(0.50), dec!(1000), now);
    let bankroll = BankrollState::new(dec!(500), NaiveDate::from_ymd_opt(2025, 3, 25).unwrap());
    let limits = RiskLimits::default();

    c.bench_function("decide_no_edge", |b| {
        b.iter(|| engine.decide(black_box(&estimate), black_box(&quote), &bankroll, &limits))
    });
}

criterion_group!(benches, benchmark_decide_trade, benchmark_decide_no_edge);
criterion_main!(benches);
