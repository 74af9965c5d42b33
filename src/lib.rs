//! Position sizing and risk/reward calculator
//!
//! `calc` holds the pure calculator; the rest is the terminal front end.

pub mod app;
pub mod calc;
pub mod cli;
pub mod config;
pub mod report;
pub mod settings;
pub mod themes;
pub mod ui;
pub mod views;
pub mod widgets;

pub use calc::{compute_trade_metrics, TradeMetrics};
