//! Results panel widget

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::calc::format::{result_rows, RowKind, RESULT_LABELS};
use crate::calc::TradeMetrics;
use crate::themes::Theme;
use crate::ui::panels::{Panel, PanelStyle};

const LABEL_WIDTH: usize = 18;

/// The six result labels. Values stay blank until the first evaluation.
pub struct MetricsPanel<'a> {
    metrics: Option<&'a TradeMetrics>,
    /// True when the latest tick could not be evaluated
    stale: bool,
    theme: &'a Theme,
}

impl<'a> MetricsPanel<'a> {
    pub fn new(theme: &'a Theme, metrics: Option<&'a TradeMetrics>) -> Self {
        Self {
            metrics,
            stale: false,
            theme,
        }
    }

    pub fn stale(mut self, stale: bool) -> Self {
        self.stale = stale;
        self
    }

    fn value_color(&self, kind: RowKind) -> Color {
        if self.stale {
            return self.theme.text_muted;
        }
        match kind {
            RowKind::Price => self.theme.text_primary,
            RowKind::Risk => self.theme.error,
            RowKind::Reward => self.theme.success,
            RowKind::Count => self.theme.accent,
            RowKind::Ratio => self.theme.info,
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.stale {
            PanelStyle::Stale
        } else {
            PanelStyle::Normal
        };
        let block = Panel::new(self.theme).title("Results").style(style).block();

        let label = |text: &str| {
            Span::styled(
                format!("{:<width$}", text, width = LABEL_WIDTH),
                Style::default().fg(self.theme.text_secondary),
            )
        };

        let lines: Vec<Line> = match self.metrics {
            Some(metrics) => result_rows(metrics)
                .into_iter()
                .map(|(name, value, kind)| {
                    Line::from(vec![
                        label(name),
                        Span::styled(value, Style::default().fg(self.value_color(kind))),
                    ])
                })
                .collect(),
            None => RESULT_LABELS
                .iter()
                .map(|name| Line::from(label(*name)))
                .collect(),
        };

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).map(|c| c.symbol()).unwrap_or(" "))
            .collect()
    }

    #[test]
    fn test_renders_formatted_values() {
        let theme = Theme::default();
        let m = TradeMetrics {
            stop_price: 47.5,
            target_price: 52.5,
            risk_per_trade: 100.0,
            reward_per_trade: 100.0,
            shares: 40,
            rr_ratio: 1.0,
        };
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        MetricsPanel::new(&theme, Some(&m)).render(area, &mut buf);

        let text: Vec<String> = (0..area.height).map(|y| row_text(&buf, y)).collect();
        let all = text.join("\n");
        assert!(all.contains("Stop-Loss Price"));
        assert!(all.contains("47.50"));
        assert!(all.contains("52.50"));
        assert!(all.contains("Share Size        40"));
        assert!(all.contains("1.00"));
    }

    #[test]
    fn test_blank_values_before_first_result() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        MetricsPanel::new(&theme, None).render(area, &mut buf);

        let all: String = (0..area.height).map(|y| row_text(&buf, y)).collect();
        assert!(all.contains("Risk/Reward"));
        assert!(!all.chars().any(|c| c.is_ascii_digit()));
    }
}
