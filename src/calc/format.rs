//! Display formatting for the result labels

use super::metrics::TradeMetrics;

/// Prices and currency amounts: two decimals
pub fn money(value: f64) -> String {
    format!("{:.2}", value)
}

/// Share count: plain integer
pub fn shares(value: i64) -> String {
    value.to_string()
}

/// Risk/reward ratio: two decimals
pub fn ratio(value: f64) -> String {
    format!("{:.2}", value)
}

/// Which tone a result row should be shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Price,
    Risk,
    Reward,
    Count,
    Ratio,
}

/// Labelled result rows, in display order
pub fn result_rows(metrics: &TradeMetrics) -> [(&'static str, String, RowKind); 6] {
    [
        ("Stop-Loss Price", money(metrics.stop_price), RowKind::Price),
        ("Profit Target", money(metrics.target_price), RowKind::Price),
        ("Risk ($)", money(metrics.risk_per_trade), RowKind::Risk),
        ("Reward ($)", money(metrics.reward_per_trade), RowKind::Reward),
        ("Share Size", shares(metrics.shares), RowKind::Count),
        ("Risk/Reward", ratio(metrics.rr_ratio), RowKind::Ratio),
    ]
}

/// Row labels without values
pub const RESULT_LABELS: [&str; 6] = [
    "Stop-Loss Price",
    "Profit Target",
    "Risk ($)",
    "Reward ($)",
    "Share Size",
    "Risk/Reward",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        assert_eq!(money(99.0), "99.00");
        assert_eq!(money(47.5), "47.50");
        assert_eq!(money(1234.567), "1234.57");
        assert_eq!(shares(40), "40");
        assert_eq!(ratio(2.0), "2.00");
    }

    #[test]
    fn test_rows_follow_labels() {
        let m = TradeMetrics {
            stop_price: 99.0,
            target_price: 102.0,
            risk_per_trade: 100.0,
            reward_per_trade: 200.0,
            shares: 100,
            rr_ratio: 2.0,
        };
        let rows = result_rows(&m);
        for (row, label) in rows.iter().zip(RESULT_LABELS) {
            assert_eq!(row.0, label);
        }
        assert_eq!(rows[4].1, "100");
        assert_eq!(rows[3].1, "200.00");
    }
}
