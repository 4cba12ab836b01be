//! Integration tests

mod config_test;
mod engine_test;
mod replay_test;
mod session_test;
