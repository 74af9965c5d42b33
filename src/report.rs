//! One-shot report for `--once`

use anyhow::Result;
use serde::Serialize;

use crate::calc::format::result_rows;
use crate::calc::{compute_trade_metrics, NumericInput, TradeMetrics};
use crate::settings::InputDefaults;

const LABEL_WIDTH: usize = 20;

/// Inputs as evaluated, next to the resulting metrics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub price: f64,
    pub capital: f64,
    pub stop_pct: f64,
    pub risk_pct: f64,
    pub target_ratio: f64,
    pub metrics: TradeMetrics,
}

impl Report {
    /// Evaluate `inputs`; `None` when price or capital do not parse
    pub fn evaluate(inputs: &InputDefaults) -> Option<Self> {
        let metrics = compute_trade_metrics(
            inputs.price.as_str(),
            inputs.capital.as_str(),
            inputs.stop_pct,
            inputs.risk_pct,
            inputs.target_ratio,
        )?;
        let price = inputs.price.to_real()?;
        let capital = inputs.capital.to_real()?;

        Some(Self {
            price,
            capital,
            stop_pct: inputs.stop_pct,
            risk_pct: inputs.risk_pct,
            target_ratio: inputs.target_ratio,
            metrics,
        })
    }

    pub fn to_text(&self) -> String {
        let mut lines = vec![
            format!("{:<w$}{:.2}", "Stock Price", self.price, w = LABEL_WIDTH),
            format!("{:<w$}{:.2}", "Capital Available", self.capital, w = LABEL_WIDTH),
            format!("{:<w$}{:.1}", "Stop-Loss %", self.stop_pct, w = LABEL_WIDTH),
            format!("{:<w$}{:.1}", "Risk per Trade %", self.risk_pct, w = LABEL_WIDTH),
            format!("{:<w$}{:.1}", "Target P&L Ratio", self.target_ratio, w = LABEL_WIDTH),
            String::new(),
        ];
        for (label, value, _) in result_rows(&self.metrics) {
            lines.push(format!("{:<w$}{}", label, value, w = LABEL_WIDTH));
        }
        lines.join("\n")
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(price: &str, capital: &str) -> InputDefaults {
        InputDefaults {
            price: price.to_string(),
            capital: capital.to_string(),
            ..InputDefaults::default()
        }
    }

    #[test]
    fn test_text_report() {
        let report = Report::evaluate(&inputs("100", "10000")).unwrap();
        let text = report.to_text();
        assert!(text.contains("Stock Price         100.00"));
        assert!(text.contains("Stop-Loss Price     99.00"));
        assert!(text.contains("Share Size          100"));
        assert!(text.ends_with("Risk/Reward         2.00"));
    }

    #[test]
    fn test_yaml_report() {
        let report = Report::evaluate(&inputs(" 50 ", "5000")).unwrap();
        let yaml = report.to_yaml().unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(value["price"].as_f64(), Some(50.0));
        assert_eq!(value["metrics"]["shares"].as_i64(), Some(100));
    }

    #[test]
    fn test_not_ready() {
        assert!(Report::evaluate(&inputs("", "1000")).is_none());
        assert!(Report::evaluate(&inputs("100", "lots")).is_none());
    }
}
