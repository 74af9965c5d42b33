//! Position sizing and risk/reward metrics for a single long trade

use serde::{Deserialize, Serialize};

use super::input::NumericInput;

/// Result of one evaluation. Recomputed from scratch every time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TradeMetrics {
    pub stop_price: f64,
    pub target_price: f64,
    pub risk_per_trade: f64,
    pub reward_per_trade: f64,
    pub shares: i64,
    pub rr_ratio: f64,
}

impl TradeMetrics {
    /// Price drop from entry to stop.
    pub fn risk_per_share(&self, price: f64) -> f64 {
        price - self.stop_price
    }

    /// Price rise from entry to target.
    pub fn reward_per_share(&self, price: f64) -> f64 {
        self.target_price - price
    }
}

/// Which divisors a guarded division accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivisorGuard {
    /// Strictly greater than zero
    Positive,
    /// Anything but zero
    NonZero,
}

impl DivisorGuard {
    fn admits(self, divisor: f64) -> bool {
        match self {
            DivisorGuard::Positive => divisor > 0.0,
            DivisorGuard::NonZero => divisor != 0.0,
        }
    }
}

/// Divide, or return zero when the divisor fails the guard.
pub fn guarded_div(numerator: f64, divisor: f64, guard: DivisorGuard) -> f64 {
    if guard.admits(divisor) {
        numerator / divisor
    } else {
        0.0
    }
}

/// Truncate toward zero. Non-finite quotients saturate, NaN becomes 0.
pub fn truncate_shares(quotient: f64) -> i64 {
    quotient.trunc() as i64
}

/// Compute trade metrics from the five calculator inputs.
///
/// `price` and `capital` come straight from user-editable fields and are
/// coerced here; `None` means the inputs are not ready yet. The percentage
/// and ratio arguments are used as given.
pub fn compute_trade_metrics<P, C>(
    price: P,
    capital: C,
    stop_pct: f64,
    risk_pct: f64,
    target_ratio: f64,
) -> Option<TradeMetrics>
where
    P: NumericInput,
    C: NumericInput,
{
    let price = price.to_real()?;
    let capital = capital.to_real()?;

    let stop_price = price * (1.0 - stop_pct / 100.0);
    let risk_per_trade = capital * (risk_pct / 100.0);
    let risk_per_share = price - stop_price;
    let shares = truncate_shares(guarded_div(
        risk_per_trade,
        risk_per_share,
        DivisorGuard::Positive,
    ));

    let target_price = price + target_ratio * (price - stop_price);
    let reward_per_share = target_price - price;
    let reward_per_trade = reward_per_share * shares as f64;
    let rr_ratio = guarded_div(reward_per_share, risk_per_share, DivisorGuard::NonZero);

    Some(TradeMetrics {
        stop_price,
        target_price,
        risk_per_trade,
        reward_per_trade,
        shares,
        rr_ratio,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_default_slider_scenario() {
        let m = compute_trade_metrics("100", "10000", 1.0, 1.0, 2.0).unwrap();
        assert_close(m.stop_price, 99.0);
        assert_close(m.risk_per_share(100.0), 1.0);
        assert_close(m.risk_per_trade, 100.0);
        assert_eq!(m.shares, 100);
        assert_close(m.target_price, 102.0);
        assert_close(m.reward_per_share(100.0), 2.0);
        assert_close(m.reward_per_trade, 200.0);
        assert_close(m.rr_ratio, 2.0);
    }

    #[test]
    fn test_wider_stop_scenario() {
        let m = compute_trade_metrics(50.0, 5000.0, 5.0, 2.0, 1.0).unwrap();
        assert_close(m.stop_price, 47.5);
        assert_close(m.risk_per_share(50.0), 2.5);
        assert_close(m.risk_per_trade, 100.0);
        assert_eq!(m.shares, 40);
        assert_close(m.target_price, 52.5);
        assert_close(m.reward_per_trade, 100.0);
        assert_close(m.rr_ratio, 1.0);
    }

    #[test]
    fn test_inputs_not_ready() {
        assert!(compute_trade_metrics("", "1000", 1.0, 1.0, 2.0).is_none());
        assert!(compute_trade_metrics("100", "abc", 1.0, 1.0, 2.0).is_none());
        assert!(compute_trade_metrics(None::<&str>, "1000", 1.0, 1.0, 2.0).is_none());
    }

    #[test]
    fn test_zero_stop_yields_no_position() {
        let m = compute_trade_metrics("100", "10000", 0.0, 1.0, 5.0).unwrap();
        assert_eq!(m.shares, 0);
        assert_eq!(m.rr_ratio, 0.0);
        assert_eq!(m.reward_per_trade, 0.0);
        assert_eq!(m.target_price, 100.0);
        assert_close(m.risk_per_trade, 100.0);
    }

    #[test]
    fn test_zero_target_ratio() {
        let m = compute_trade_metrics("80", "2000", 2.0, 1.0, 0.0).unwrap();
        assert_eq!(m.target_price, 80.0);
        assert_eq!(m.reward_per_trade, 0.0);
        assert_eq!(m.rr_ratio, 0.0);
        assert!(m.shares > 0);
    }

    #[test]
    fn test_negative_stop_skips_sizing_but_not_ratio() {
        // Stop above entry: no shares, but the ratio divisor is non-zero.
        let m = compute_trade_metrics(100.0, 10000.0, -1.0, 1.0, 2.0).unwrap();
        assert_eq!(m.shares, 0);
        assert_close(m.rr_ratio, 2.0);
        assert_close(m.target_price, 98.0);
    }

    #[test]
    fn test_shares_truncate() {
        // 100 / 3 = 33.33..
        let m = compute_trade_metrics(100.0, 10000.0, 3.0, 1.0, 1.0).unwrap();
        assert_eq!(m.shares, 33);
        assert_eq!(truncate_shares(-2.7), -2);
        assert_eq!(truncate_shares(f64::NAN), 0);
    }

    #[test]
    fn test_guarded_div() {
        assert_eq!(guarded_div(10.0, 0.0, DivisorGuard::NonZero), 0.0);
        assert_eq!(guarded_div(10.0, -2.0, DivisorGuard::Positive), 0.0);
        assert_eq!(guarded_div(10.0, -2.0, DivisorGuard::NonZero), -5.0);
        assert_eq!(guarded_div(10.0, 4.0, DivisorGuard::Positive), 2.5);
    }
}
