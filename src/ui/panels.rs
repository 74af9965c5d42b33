//! Bordered, titled boxes shared by the calculator sections

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use crate::themes::Theme;

/// Border tone of a panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanelStyle {
    #[default]
    Normal,
    /// Holds the input that receives keys
    Active,
    /// Shows a result that no longer matches the inputs
    Stale,
}

/// Builder for a themed [`Block`]
#[derive(Clone)]
pub struct Panel<'a> {
    theme: &'a Theme,
    title: Option<&'a str>,
    style: PanelStyle,
    padding: Padding,
}

impl<'a> Panel<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            title: None,
            style: PanelStyle::Normal,
            padding: Padding::uniform(1),
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn style(mut self, style: PanelStyle) -> Self {
        self.style = style;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    fn colors(&self) -> (Color, Color) {
        let t = self.theme;
        match self.style {
            PanelStyle::Normal => (t.border, t.text_secondary),
            PanelStyle::Active => (t.border_focused, t.accent),
            PanelStyle::Stale => (t.text_muted, t.text_muted),
        }
    }

    pub fn block(&self) -> Block<'a> {
        let (border, title) = self.colors();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .padding(self.padding);

        match self.title {
            Some(text) => block
                .title(format!(" {text} "))
                .title_style(Style::default().fg(title).bold()),
            None => block,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stale_panel_uses_muted_border() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        Panel::new(&theme)
            .title("Results")
            .style(PanelStyle::Stale)
            .block()
            .render(area, &mut buf);

        let corner = buf.cell((0, 0)).unwrap();
        assert_eq!(corner.symbol(), "╭");
        assert_eq!(corner.fg, theme.text_muted);
        let title: String = (2..9)
            .map(|x| buf.cell((x, 0)).unwrap().symbol().to_string())
            .collect();
        assert_eq!(title, "Results");
    }
}
