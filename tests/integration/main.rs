//! Integration tests for etf-divergence

mod calc_test;
mod config_test;
mod interactive_test;
