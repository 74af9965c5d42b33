//! Trade calculator core: coercion, metrics, slider grids and formatting

pub mod format;
pub mod input;
pub mod metrics;
pub mod slider;

pub use input::NumericInput;
pub use metrics::{compute_trade_metrics, guarded_div, DivisorGuard, TradeMetrics};
pub use slider::{Slider, SliderSpec, RISK_PCT, STOP_PCT, TARGET_RATIO};
