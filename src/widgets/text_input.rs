//! Single-line free-text input
//!
//! Accepts anything printable; whether the text is a usable number is the
//! calculator's business.

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::themes::Theme;

/// Label column width shared with the slider rows
pub const LABEL_WIDTH: u16 = 20;

const MAX_LEN: usize = 32;
const CURSOR: &str = "▏";

/// Text field state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    label: &'static str,
    value: String,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
        }
    }

    pub fn with_value(label: &'static str, value: impl Into<String>) -> Self {
        let mut field = Self::new(label);
        field.set(value);
        field
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into().chars().take(MAX_LEN).collect();
    }

    pub fn insert(&mut self, c: char) {
        if c.is_control() || self.value.chars().count() >= MAX_LEN {
            return;
        }
        self.value.push(c);
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Render as one row: label, then the value in a bracketed box
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        let row = Rect { height: 1, ..area };

        let marker = if focused { "> " } else { "  " };
        let label_color = if focused { theme.accent } else { theme.text_primary };
        let box_width = row.width.saturating_sub(LABEL_WIDTH + 2) as usize;

        // Keep the tail visible when the text is wider than the box
        let room = box_width.saturating_sub(1);
        let shown: String = {
            let len = self.value.chars().count();
            self.value.chars().skip(len.saturating_sub(room)).collect()
        };
        let padding = room.saturating_sub(shown.chars().count());

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(theme.accent)),
            Span::styled(
                format!("{:<width$}", self.label, width = LABEL_WIDTH as usize - 2),
                Style::default().fg(label_color),
            ),
            Span::styled("[", Style::default().fg(theme.border)),
            Span::styled(shown, Style::default().fg(theme.text_primary).bg(theme.surface)),
        ];
        if focused {
            spans.push(Span::styled(CURSOR, Style::default().fg(theme.accent).bg(theme.surface)));
        } else {
            spans.push(Span::styled(" ", Style::default().bg(theme.surface)));
        }
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(theme.surface)));
        spans.push(Span::styled("]", Style::default().fg(theme.border)));

        Paragraph::new(Line::from(spans)).render(row, buf);
    }
}
