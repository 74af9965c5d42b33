//! Calculator view - inputs, results and the risk/reward chart

use anyhow::Result;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tracing::debug;

use crate::calc::{
    compute_trade_metrics, NumericInput, Slider, TradeMetrics, RISK_PCT, STOP_PCT, TARGET_RATIO,
};
use crate::settings::InputDefaults;
use crate::themes::Theme;
use crate::ui::panels::{Panel, PanelStyle};
use crate::widgets::metrics_panel::MetricsPanel;
use crate::widgets::risk_reward_chart::{self, RiskRewardChart};
use crate::widgets::slider_bar::render_slider;
use crate::widgets::text_input::TextField;

/// Input that currently receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Price,
    Capital,
    StopPct,
    RiskPct,
    TargetRatio,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Price,
        Focus::Capital,
        Focus::StopPct,
        Focus::RiskPct,
        Focus::TargetRatio,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Last successful evaluation: what the labels and chart show
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot {
    pub price: f64,
    pub metrics: TradeMetrics,
}

/// Calculator view state
pub struct CalculatorView {
    price: TextField,
    capital: TextField,
    stop_pct: Slider,
    risk_pct: Slider,
    target_ratio: Slider,
    focus: Focus,
    /// Kept across ticks whose inputs do not parse
    snapshot: Option<Snapshot>,
    /// Whether the most recent tick produced a result
    ready: bool,
}

impl CalculatorView {
    pub fn new(defaults: &InputDefaults) -> Self {
        Self {
            price: TextField::with_value("Stock Price", defaults.price.clone()),
            capital: TextField::with_value("Capital Available", defaults.capital.clone()),
            stop_pct: Slider::with_value(STOP_PCT, defaults.stop_pct),
            risk_pct: Slider::with_value(RISK_PCT, defaults.risk_pct),
            target_ratio: Slider::with_value(TARGET_RATIO, defaults.target_ratio),
            focus: Focus::Price,
            snapshot: None,
            ready: false,
        }
    }

    /// Put every input back to `defaults`. The last result stays on screen.
    pub fn reset(&mut self, defaults: &InputDefaults) {
        self.price.set(defaults.price.clone());
        self.capital.set(defaults.capital.clone());
        self.stop_pct.set(defaults.stop_pct);
        self.risk_pct.set(defaults.risk_pct);
        self.target_ratio.set(defaults.target_ratio);
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Current slider values as (stop_pct, risk_pct, target_ratio)
    pub fn slider_values(&self) -> (f64, f64, f64) {
        (
            self.stop_pct.value(),
            self.risk_pct.value(),
            self.target_ratio.value(),
        )
    }

    /// Recompute from the current inputs.
    ///
    /// When price or capital do not parse, the previous snapshot is left in
    /// place and `false` is returned.
    pub fn evaluate(&mut self) -> bool {
        let metrics = compute_trade_metrics(
            self.price.value(),
            self.capital.value(),
            self.stop_pct.value(),
            self.risk_pct.value(),
            self.target_ratio.value(),
        );

        let result = match (metrics, self.price.value().to_real()) {
            (Some(metrics), Some(price)) => Some(Snapshot { price, metrics }),
            _ => None,
        };

        let ready = result.is_some();
        if ready != self.ready {
            debug!("Inputs {}", if ready { "ready" } else { "not ready" });
        }
        self.ready = ready;
        if result.is_some() {
            self.snapshot = result;
        }
        ready
    }

    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                return;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                return;
            }
            _ => {}
        }

        match self.focus {
            Focus::Price | Focus::Capital => {
                let field = if self.focus == Focus::Price {
                    &mut self.price
                } else {
                    &mut self.capital
                };
                match key {
                    KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
                        field.clear()
                    }
                    KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                        field.insert(c)
                    }
                    KeyCode::Backspace => field.backspace(),
                    _ => {}
                }
            }
            Focus::StopPct | Focus::RiskPct | Focus::TargetRatio => {
                let slider = match self.focus {
                    Focus::StopPct => &mut self.stop_pct,
                    Focus::RiskPct => &mut self.risk_pct,
                    _ => &mut self.target_ratio,
                };
                match key {
                    KeyCode::Left | KeyCode::Char('h') => slider.nudge(-1),
                    KeyCode::Right | KeyCode::Char('l') => slider.nudge(1),
                    KeyCode::PageDown => slider.nudge(-10),
                    KeyCode::PageUp => slider.nudge(10),
                    KeyCode::Home => slider.to_min(),
                    KeyCode::End => slider.to_max(),
                    KeyCode::Char('d') => slider.reset(),
                    _ => {}
                }
            }
        }
    }

    fn render_inputs(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Panel::new(theme)
            .title("Trade")
            .style(PanelStyle::Active)
            .block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Price
                Constraint::Length(1), // Capital
                Constraint::Length(1),
                Constraint::Length(1), // Stop
                Constraint::Length(1), // Risk
                Constraint::Length(1), // Ratio
                Constraint::Min(0),
            ])
            .split(inner);

        let buf = frame.buffer_mut();
        self.price.render(rows[0], buf, theme, self.focus == Focus::Price);
        self.capital.render(rows[1], buf, theme, self.focus == Focus::Capital);
        render_slider(&self.stop_pct, rows[3], buf, theme, self.focus == Focus::StopPct);
        render_slider(&self.risk_pct, rows[4], buf, theme, self.focus == Focus::RiskPct);
        render_slider(
            &self.target_ratio,
            rows[5],
            buf,
            theme,
            self.focus == Focus::TargetRatio,
        );
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) -> Result<()> {
        let bg = Block::default().style(Style::default().bg(theme.background));
        frame.render_widget(bg, area);

        // Input column | separator | chart
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(55),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(10), // Inputs
                Constraint::Length(10), // Results
                Constraint::Min(0),
            ])
            .split(columns[0]);

        self.render_inputs(frame, left[0], theme);

        MetricsPanel::new(theme, self.snapshot.as_ref().map(|s| &s.metrics))
            .stale(self.snapshot.is_some() && !self.ready)
            .render(left[1], frame.buffer_mut());

        let separator = Paragraph::new(vec![Line::from("│"); columns[1].height as usize])
            .style(Style::default().fg(theme.border));
        frame.render_widget(separator, columns[1]);

        match &self.snapshot {
            Some(s) => RiskRewardChart::new(s.price, s.metrics.stop_price, s.metrics.target_price)
                .stale(!self.ready)
                .render(columns[2], frame.buffer_mut(), theme),
            None => risk_reward_chart::render_placeholder(
                columns[2],
                frame.buffer_mut(),
                theme,
                "Enter a stock price and capital",
            ),
        }

        Ok(())
    }
}
