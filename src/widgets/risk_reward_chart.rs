//! Risk / reward zone chart
//!
//! Two vertical bars sharing one column band: the reward zone above zero and
//! the risk zone below it, with markers at the far ends and a dashed zero
//! line. The whole area is cleared and redrawn on every call.

use ratatui::prelude::*;
use ratatui::widgets::{Clear, Padding, Paragraph, Widget};

use crate::themes::Theme;
use crate::ui::panels::{Panel, PanelStyle};

/// Headroom applied to each side of the vertical range
pub const Y_HEADROOM: f64 = 1.2;

const TITLE: &str = "Risk / Reward Zones";
const Y_TITLE: &str = "Price Movement";

const BAR_CHAR: &str = "█";
const MARKER_CHAR: &str = "●";
const ZERO_LINE_CHAR: &str = "┄";

/// Value-space layout of the chart, independent of any drawing surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    /// Entry minus stop; positive for a stop below entry
    pub diff_stop: f64,
    /// Target minus entry; positive for a target above entry
    pub diff_target: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartGeometry {
    pub fn new(price: f64, stop_price: f64, target_price: f64) -> Self {
        let diff_stop = price - stop_price;
        let diff_target = target_price - price;

        // A side with nothing to show keeps a unit range
        let y_min = if diff_stop > 0.0 {
            -diff_stop * Y_HEADROOM
        } else {
            -1.0
        };
        let y_max = if diff_target > 0.0 {
            diff_target * Y_HEADROOM
        } else {
            1.0
        };

        Self {
            diff_stop,
            diff_target,
            y_min,
            y_max,
        }
    }

    /// Reward bar extent as (low, high)
    pub fn reward_span(&self) -> (f64, f64) {
        ordered(0.0, self.diff_target)
    }

    /// Risk bar extent as (low, high)
    pub fn risk_span(&self) -> (f64, f64) {
        ordered(-self.diff_stop, 0.0)
    }

    pub fn reward_marker(&self) -> f64 {
        self.diff_target
    }

    pub fn risk_marker(&self) -> f64 {
        -self.diff_stop
    }

    /// Row for `value` in a plot `height` rows tall, row 0 at the top
    pub fn row_of(&self, value: f64, height: u16) -> u16 {
        if height <= 1 {
            return 0;
        }
        let last = f64::from(height - 1);
        let t = (self.y_max - value) / (self.y_max - self.y_min);
        // NaN saturates to 0 in the cast
        ((t * last).round().clamp(0.0, last)) as u16
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Axis label text, shortened for large magnitudes. Never wider than
/// eight characters.
fn axis_label(v: f64) -> String {
    if v.abs() >= 1e9 {
        format!("{:.1e}", v)
    } else if v.abs() >= 1_000_000.0 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if v.abs() >= 1_000.0 {
        format!("{:.1}K", v / 1_000.0)
    } else {
        format!("{:.2}", v)
    }
}

fn put(buf: &mut Buffer, x: u16, y: u16, symbol: &str, color: Color) {
    if let Some(cell) = buf.cell_mut((x, y)) {
        cell.set_symbol(symbol);
        cell.set_fg(color);
    }
}

/// Chart widget for one evaluation
pub struct RiskRewardChart {
    geometry: ChartGeometry,
    stale: bool,
}

impl RiskRewardChart {
    pub fn new(price: f64, stop_price: f64, target_price: f64) -> Self {
        Self {
            geometry: ChartGeometry::new(price, stop_price, target_price),
            stale: false,
        }
    }

    /// Mute the frame when the drawn result is from an earlier tick
    pub fn stale(mut self, stale: bool) -> Self {
        self.stale = stale;
        self
    }

    /// Clear `area` and draw the chart into it
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let style = if self.stale {
            PanelStyle::Stale
        } else {
            PanelStyle::Normal
        };
        let plot = render_frame(area, buf, theme, style);
        if plot.width < 3 || plot.height < 3 {
            return;
        }
        self.render_plot(plot, buf, theme);
    }

    fn render_plot(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let g = &self.geometry;

        // Y title down the first column, labels after it
        let title_width: u16 = if area.height as usize >= Y_TITLE.len() { 2 } else { 0 };
        let label_width: u16 = 9;
        let plot_x = area.x + title_width + label_width;
        let plot_width = area.width.saturating_sub(title_width + label_width);
        let h = area.height;
        if plot_width < 2 {
            return;
        }

        if title_width > 0 {
            let top = area.y + (h - Y_TITLE.len() as u16) / 2;
            for (i, ch) in Y_TITLE.chars().enumerate() {
                if let Some(cell) = buf.cell_mut((area.x, top + i as u16)) {
                    cell.set_char(ch);
                    cell.set_fg(theme.text_secondary);
                }
            }
        }

        // Bars take the middle half of the plot width
        let bar_width = (plot_width / 2).max(1);
        let bar_left = plot_x + (plot_width - bar_width) / 2;
        let center = bar_left + bar_width / 2;

        let zero_row = g.row_of(0.0, h);
        let fill = |buf: &mut Buffer, span: (f64, f64), color: Color| {
            let top = g.row_of(span.1, h);
            let bottom = g.row_of(span.0, h);
            for row in top..=bottom {
                for x in bar_left..bar_left + bar_width {
                    put(buf, x, area.y + row, BAR_CHAR, color);
                }
            }
        };

        fill(buf, g.reward_span(), theme.success);
        fill(buf, g.risk_span(), theme.error);

        put(buf, center, area.y + g.row_of(g.reward_marker(), h), MARKER_CHAR, theme.marker);
        put(buf, center, area.y + g.row_of(g.risk_marker(), h), MARKER_CHAR, theme.marker);

        for x in plot_x..plot_x + plot_width {
            put(buf, x, area.y + zero_row, ZERO_LINE_CHAR, theme.info);
        }

        // Y-axis labels (top, zero, bottom), skipping ones that would collide
        let labels = [
            (0, g.y_max),
            (zero_row, 0.0),
            (h - 1, g.y_min),
        ];
        let mut used: Vec<u16> = Vec::with_capacity(labels.len());
        for (row, value) in labels {
            if used.contains(&row) {
                continue;
            }
            used.push(row);
            let text = format!("{:>8}", axis_label(value));
            let x0 = area.x + title_width;
            for (i, ch) in text.chars().take(label_width as usize - 1).enumerate() {
                if let Some(cell) = buf.cell_mut((x0 + i as u16, area.y + row)) {
                    cell.set_char(ch);
                    cell.set_fg(theme.text_muted);
                }
            }
        }
    }
}

/// Clear the area, draw the titled block, and return the plot area inside it
fn render_frame(area: Rect, buf: &mut Buffer, theme: &Theme, style: PanelStyle) -> Rect {
    Clear.render(area, buf);
    let block = Panel::new(theme)
        .title(TITLE)
        .style(style)
        .padding(Padding::horizontal(1))
        .block()
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Draw the empty chart frame with a hint, used before the first evaluation
pub fn render_placeholder(area: Rect, buf: &mut Buffer, theme: &Theme, hint: &str) {
    let inner = render_frame(area, buf, theme, PanelStyle::Normal);
    if inner.height == 0 {
        return;
    }
    let row = Rect {
        x: inner.x,
        y: inner.y + inner.height / 2,
        width: inner.width,
        height: 1,
    };
    Paragraph::new(hint)
        .style(Style::default().fg(theme.text_muted))
        .alignment(Alignment::Center)
        .render(row, buf);
}
