//! Widget modules for UI components

pub mod metrics_panel;
pub mod risk_reward_chart;
pub mod slider_bar;
pub mod text_input;

pub use risk_reward_chart::{ChartGeometry, RiskRewardChart};
