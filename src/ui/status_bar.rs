//! Status bar component
//!
//! Bottom line: app name, input readiness, a transient message, clock and
//! help hint.

use chrono::Local;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::themes::Theme;

const SEPARATOR: &str = " │ ";

/// Status bar widget
pub struct StatusBar<'a> {
    theme: &'a Theme,
    ready: bool,
    message: Option<(&'a str, bool)>,
    show_clock: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: &'a Theme, ready: bool) -> Self {
        Self {
            theme,
            ready,
            message: None,
            show_clock: true,
        }
    }

    /// Transient message; `is_error` picks the color
    pub fn message(mut self, message: &'a str, is_error: bool) -> Self {
        self.message = Some((message, is_error));
        self
    }

    pub fn show_clock(mut self, show: bool) -> Self {
        self.show_clock = show;
        self
    }

    fn build_content(&self) -> Line<'a> {
        let sep = || Span::styled(SEPARATOR, Style::default().fg(self.theme.border));

        let mut spans = vec![Span::styled(
            "◆ RISK CALC",
            Style::default().fg(self.theme.accent).bold(),
        )];

        spans.push(sep());
        let (label, color) = if self.ready {
            ("Ready", self.theme.success)
        } else {
            ("Waiting for price and capital", self.theme.warning)
        };
        spans.push(Span::styled(
            format!("{} {}", self.theme.status_dot(self.ready), label),
            Style::default().fg(color),
        ));

        if let Some((message, is_error)) = self.message {
            spans.push(sep());
            spans.push(Span::styled(
                message,
                Style::default().fg(if is_error {
                    self.theme.error
                } else {
                    self.theme.success
                }),
            ));
        }

        if self.show_clock {
            spans.push(sep());
            spans.push(Span::styled(
                Local::now().format("%H:%M:%S").to_string(),
                Style::default().fg(self.theme.text_muted),
            ));
        }

        spans.push(sep());
        spans.push(Span::styled(
            "[F1] Help",
            Style::default().fg(self.theme.text_muted),
        ));

        Line::from(spans)
    }
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.surface));
        Paragraph::new(self.build_content()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(bar: StatusBar) -> String {
        bar.build_content()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_readiness_label() {
        let theme = Theme::default();
        assert!(text(StatusBar::new(&theme, true).show_clock(false)).contains("● Ready"));
        assert!(text(StatusBar::new(&theme, false).show_clock(false)).contains("○ Waiting"));
    }

    #[test]
    fn test_message_is_included() {
        let theme = Theme::default();
        let s = text(StatusBar::new(&theme, true).message("Defaults saved", false));
        assert!(s.contains("Defaults saved"));
        assert!(s.ends_with("[F1] Help"));
    }
}
