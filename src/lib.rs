//! etf-divergence: Divergence calculator for precious-metal ETFs
//!
//! This library provides the core components for:
//! - Theoretical ETF value from a futures price and forward rate
//! - Divergence of the market price from that value
//! - Form state with number-widget parsing and stepping
//! - Result panel rendering (text and JSON)
//! - Command-line and interactive front ends

pub mod cli;
pub mod config;
pub mod display;
pub mod form;
pub mod model;
pub mod telemetry;
