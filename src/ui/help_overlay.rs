//! Key reference shown over the calculator with F1

use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph, Widget};

use crate::themes::Theme;
use crate::ui::panels::{Panel, PanelStyle};

type Section = (&'static str, &'static [(&'static str, &'static str)]);

const KEY_WIDTH: u16 = 12;

/// Left column, top to bottom
const LEFT: [Section; 3] = [
    (
        "Navigation",
        &[("Tab/Down", "Next input"), ("S-Tab/Up", "Previous input")],
    ),
    (
        "Price / Capital",
        &[
            ("0-9 . e", "Type a number"),
            ("Backspace", "Delete last char"),
            ("Ctrl+U", "Clear field"),
        ],
    ),
    (
        "General",
        &[
            ("F1", "Toggle this help"),
            ("Ctrl+S", "Save defaults"),
            ("Ctrl+R", "Reset all inputs"),
            ("Esc/Ctrl+Q", "Quit"),
        ],
    ),
];

const RIGHT: [Section; 1] = [(
    "Sliders",
    &[
        ("Left/h", "Down 0.1"),
        ("Right/l", "Up 0.1"),
        ("PgDn/PgUp", "Down/up 1.0"),
        ("Home/End", "Minimum/maximum"),
        ("d", "Back to default"),
    ],
)];

/// Help overlay state
#[derive(Debug, Default)]
pub struct HelpOverlay {
    pub visible: bool,
}

impl HelpOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    /// Draw sections one under another, with a blank row between them
    fn render_column(sections: &[Section], area: Rect, buf: &mut Buffer, theme: &Theme) {
        let mut y = area.y;
        let bottom = area.bottom();

        for (title, keys) in sections {
            if y >= bottom {
                return;
            }
            Paragraph::new(*title)
                .style(Style::default().fg(theme.text_secondary).underlined())
                .render(Rect::new(area.x, y, area.width, 1), buf);
            y += 1;

            for (key, what) in keys.iter() {
                if y >= bottom {
                    return;
                }
                let line = Line::from(vec![
                    Span::styled(
                        format!("{:>w$}", key, w = KEY_WIDTH as usize),
                        Style::default().fg(theme.accent).bold(),
                    ),
                    Span::styled(format!("  {what}"), Style::default().fg(theme.text_primary)),
                ]);
                Paragraph::new(line).render(Rect::new(area.x, y, area.width, 1), buf);
                y += 1;
            }
            y += 1;
        }
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        if !self.visible {
            return;
        }

        let width = (area.width * 7 / 10).min(area.width.saturating_sub(4));
        let height = (area.height * 4 / 5).min(area.height.saturating_sub(4));
        let popup = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        };

        Clear.render(popup, buf);
        let block = Panel::new(theme)
            .title("Keyboard Shortcuts")
            .style(PanelStyle::Active)
            .block()
            .style(Style::default().bg(theme.surface_elevated));
        let inner = block.inner(popup);
        block.render(popup, buf);
        if inner.height == 0 {
            return;
        }

        let body = Rect {
            height: inner.height - 1,
            ..inner
        };
        let [left, right] = Layout::horizontal([Constraint::Percentage(50); 2]).areas(body);
        Self::render_column(&LEFT, left, buf, theme);
        Self::render_column(&RIGHT, right, buf, theme);

        Paragraph::new("[Press any key to close]")
            .style(Style::default().fg(theme.text_muted))
            .alignment(Alignment::Center)
            .render(Rect { y: inner.bottom() - 1, height: 1, ..inner }, buf);
    }
}
