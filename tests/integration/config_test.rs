//! Configuration file tests

use poly_edge::config::Config;
use poly_edge::risk::RiskLimits;
use rust_decimal_macros::dec;

#[test]
fn test_config_example_loads() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.risk, RiskLimits::default());
    assert_eq!(config.bankroll.initial_balance, dec!(100));
    assert!(config.risk.validate().is_ok());
}

#[test]
fn test_config_round_trips_through_toml() {
    let config = Config::default();
    let rendered = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&rendered).unwrap();
    assert_eq!(parsed, config);
}
