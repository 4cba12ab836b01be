//! Kelly criterion for binary outcome shares

use rust_decimal::Decimal;

/// Full Kelly fraction for buying a share at `market_price`
///
/// For Polymarket binary markets:
/// - Shares pay $1 if correct, $0 if wrong
/// - Net odds: b = (1 - market_price) / market_price
/// - Kelly fraction: f* = (p * (b + 1) - 1) / b
///
/// Clamped to [0, 1]; prices outside (0, 1) yield 0.
pub fn kelly_fraction(probability: Decimal, market_price: Decimal) -> Decimal {
    if market_price <= Decimal::ZERO || market_price >= Decimal::ONE {
        return Decimal::ZERO;
    }

    let odds = (Decimal::ONE - market_price) / market_price;
    let fraction = (probability * (odds + Decimal::ONE) - Decimal::ONE) / odds;

    fraction.max(Decimal::ZERO).min(Decimal::ONE)
}
