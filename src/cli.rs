//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::time::Duration;

use crate::calc::{Slider, RISK_PCT, STOP_PCT, TARGET_RATIO};
use crate::settings::InputDefaults;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Yaml,
}

#[derive(Debug, Parser)]
#[clap(name = "riskcalc", version, about = "Position sizing and risk/reward calculator")]
pub struct Cli {
    /// Stock price (free text, parsed like the input field)
    #[clap(long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Capital available (free text, parsed like the input field)
    #[clap(long, allow_hyphen_values = true)]
    pub capital: Option<String>,

    /// Stop-loss percent, snapped to 0.5..=10 in steps of 0.1
    #[clap(long)]
    pub stop_pct: Option<f64>,

    /// Risk per trade percent, snapped to 0.5..=10 in steps of 0.1
    #[clap(long)]
    pub risk_pct: Option<f64>,

    /// Target reward multiple of the risk, snapped to 0..=10 in steps of 0.1
    #[clap(long)]
    pub target_ratio: Option<f64>,

    /// Input poll cadence in milliseconds
    #[clap(long)]
    pub tick_ms: Option<u64>,

    /// Evaluate once, print a report and exit without starting the UI
    #[clap(long)]
    pub once: bool,

    /// Report format for --once
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    /// Layer command-line values over `base`. Slider values land on the slider grid.
    pub fn apply_to(&self, base: &InputDefaults) -> InputDefaults {
        let snap = |spec, flag: Option<f64>, fallback: f64| {
            Slider::with_value(spec, flag.unwrap_or(fallback)).value()
        };

        InputDefaults {
            price: self.price.clone().unwrap_or_else(|| base.price.clone()),
            capital: self.capital.clone().unwrap_or_else(|| base.capital.clone()),
            stop_pct: snap(STOP_PCT, self.stop_pct, base.stop_pct),
            risk_pct: snap(RISK_PCT, self.risk_pct, base.risk_pct),
            target_ratio: snap(TARGET_RATIO, self.target_ratio, base.target_ratio),
        }
    }

    /// Poll cadence from the flag, if given and non-zero
    pub fn tick(&self) -> Option<Duration> {
        self.tick_ms.filter(|ms| *ms > 0).map(Duration::from_millis)
    }
}
