//! Horizontal slider row: label, track and current value

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Widget};

use crate::calc::Slider;
use crate::themes::Theme;
use crate::widgets::text_input::LABEL_WIDTH;

/// Width of the value readout after the track
const VALUE_WIDTH: u16 = 6;

/// Render a slider into a single row
pub fn render_slider(slider: &Slider, area: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let row = Rect { height: 1, ..area };

    let marker = if focused { "> " } else { "  " };
    let label_color = if focused { theme.accent } else { theme.text_primary };

    // Track between brackets
    let track_width = row.width.saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 2) as usize;
    let filled = ((track_width as f64) * slider.fraction()).round() as usize;
    let filled = filled.min(track_width);
    // The thumb sits on the last filled cell, or the first cell at minimum
    let thumb = filled.saturating_sub(1);

    let track_color = if focused { theme.accent } else { theme.accent_secondary };
    let mut track = String::with_capacity(track_width * 3);
    for i in 0..track_width {
        track.push_str(if i == thumb {
            "◆"
        } else if i < filled {
            "━"
        } else {
            "─"
        });
    }

    let spans = vec![
        Span::styled(marker, Style::default().fg(theme.accent)),
        Span::styled(
            format!("{:<width$}", slider.spec().label, width = LABEL_WIDTH as usize - 2),
            Style::default().fg(label_color),
        ),
        Span::styled("[", Style::default().fg(theme.border)),
        Span::styled(track, Style::default().fg(track_color)),
        Span::styled("]", Style::default().fg(theme.border)),
        Span::styled(
            format!("{:>width$.1}", slider.value(), width = VALUE_WIDTH as usize),
            Style::default().fg(theme.text_primary).bold(),
        ),
    ];

    Paragraph::new(Line::from(spans)).render(row, buf);
}
