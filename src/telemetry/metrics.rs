//! Prometheus metrics

use crate::bankroll::BankrollState;
use crate::engine::Decision;
use metrics_exporter_prometheus::PrometheusBuilder;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::net::SocketAddr;

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Current balance
    Balance,
    /// High-water mark
    PeakBalance,
    /// Current drawdown fraction
    DrawdownPct,
    /// Settled trades today
    TradesToday,
}

impl GaugeMetric {
    fn name(self) -> &'static str {
        match self {
            GaugeMetric::Balance => "polyedge_balance_usd",
            GaugeMetric::PeakBalance => "polyedge_peak_balance_usd",
            GaugeMetric::DrawdownPct => "polyedge_drawdown_pct",
            GaugeMetric::TradesToday => "polyedge_trades_today",
        }
    }
}

/// Serve metrics over HTTP on `port`
pub fn install_exporter(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;
    tracing::info!(%addr, "Prometheus exporter listening");
    Ok(())
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    metrics::gauge!(metric.name()).set(value);
}

/// Count a decision by outcome
pub fn record_decision(decision: &Decision) {
    let outcome = match decision.reason() {
        None => "trade",
        Some(reason) => reason.as_str(),
    };
    metrics::counter!("polyedge_decisions_total", "outcome" => outcome).increment(1);
}

/// Count an invalid collaborator input
pub fn record_invalid_input() {
    metrics::counter!("polyedge_decisions_total", "outcome" => "invalid_input").increment(1);
}

/// Count a settlement by result
pub fn record_settlement(net_pnl: Decimal) {
    let result = if net_pnl > Decimal::ZERO {
        "win"
    } else if net_pnl < Decimal::ZERO {
        "loss"
    } else {
        "flat"
    };
    metrics::counter!("polyedge_settlements_total", "result" => result).increment(1);
}

/// Publish bankroll gauges
pub fn record_bankroll(state: &BankrollState) {
    set_gauge(GaugeMetric::Balance, to_f64(state.current_balance));
    set_gauge(GaugeMetric::PeakBalance, to_f64(state.peak_balance));
    set_gauge(GaugeMetric::DrawdownPct, to_f64(state.drawdown()));
    set_gauge(GaugeMetric::TradesToday, f64::from(state.trades_today));
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}
