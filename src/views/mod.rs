//! View modules for the calculator screen

pub mod calculator;

pub use calculator::{CalculatorView, Focus, Snapshot};
