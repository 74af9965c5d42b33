//! Main application structure and event loop

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::settings::{InputDefaults, Settings};
use crate::themes::Theme;
use crate::ui::{HelpOverlay, StatusBar};
use crate::views::CalculatorView;

/// How long a status message stays visible
const MESSAGE_TTL: Duration = Duration::from_secs(4);

/// Main application state
pub struct App {
    view: CalculatorView,
    theme: Theme,
    settings: Settings,
    settings_path: PathBuf,
    /// Values the inputs reset to
    defaults: InputDefaults,
    help_overlay: HelpOverlay,
    /// Evaluation cadence
    tick: Duration,
    /// (text, is_error, shown at)
    message: Option<(String, bool, Instant)>,
    should_quit: bool,
}

impl App {
    /// Create the app. `defaults` already has command-line overrides applied.
    pub fn new(
        settings: Settings,
        settings_path: PathBuf,
        defaults: InputDefaults,
        tick: Duration,
    ) -> Self {
        info!("Initializing risk calculator (tick {:?})", tick);
        let theme = Theme::from_mode(settings.display.theme);
        let mut view = CalculatorView::new(&defaults);
        view.evaluate();

        Self {
            view,
            theme,
            settings,
            settings_path,
            defaults,
            help_overlay: HelpOverlay::new(),
            tick,
            message: None,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view(&self) -> &CalculatorView {
        &self.view
    }

    fn notify(&mut self, text: impl Into<String>, is_error: bool) {
        self.message = Some((text.into(), is_error, Instant::now()));
    }

    /// Run the main event loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key.code, key.modifiers);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => {
                        debug!("Event stream closed");
                        break;
                    }
                },
            }

            if self.should_quit {
                break;
            }

            self.view.evaluate();
            if let Some((_, _, at)) = &self.message {
                if at.elapsed() >= MESSAGE_TTL {
                    self.message = None;
                }
            }

            terminal.draw(|f| self.draw(f))?;
        }

        info!("Exiting");
        Ok(())
    }

    fn draw(&self, f: &mut Frame) {
        let area = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        if let Err(e) = self.view.render(f, chunks[0], &self.theme) {
            warn!("View render error: {}", e);
        }

        let mut status = StatusBar::new(&self.theme, self.view.is_ready())
            .show_clock(self.settings.display.show_clock);
        if let Some((text, is_error, _)) = &self.message {
            status = status.message(text, *is_error);
        }
        f.render_widget(status, chunks[1]);

        self.help_overlay.render(area, f.buffer_mut(), &self.theme);
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Any key closes the help overlay
        if self.help_overlay.visible {
            self.help_overlay.hide();
            return;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('s') => {
                    self.save_defaults();
                    return;
                }
                KeyCode::Char('r') => {
                    self.view.reset(&self.defaults);
                    self.notify("Inputs reset", false);
                    return;
                }
                _ => {}
            }
        }

        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(1) => self.help_overlay.toggle(),
            _ => self.view.handle_key(key, modifiers),
        }
    }

    /// Store the current slider positions as the defaults in the settings file
    fn save_defaults(&mut self) {
        let (stop_pct, risk_pct, target_ratio) = self.view.slider_values();
        let mut settings = self.settings.clone();
        settings.defaults.stop_pct = stop_pct;
        settings.defaults.risk_pct = risk_pct;
        settings.defaults.target_ratio = target_ratio;

        match settings.save(&self.settings_path) {
            Ok(()) => {
                self.settings = settings;
                self.defaults.stop_pct = stop_pct;
                self.defaults.risk_pct = risk_pct;
                self.defaults.target_ratio = target_ratio;
                self.notify("Slider defaults saved", false);
            }
            Err(e) => {
                warn!("Failed to save settings: {:#}", e);
                self.notify(format!("Save failed: {}", e), true);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_in(dir: &tempfile::TempDir) -> App {
        let defaults = InputDefaults {
            price: "100".to_string(),
            capital: "10000".to_string(),
            ..InputDefaults::default()
        };
        App::new(
            Settings::default(),
            dir.path().join("settings.yaml"),
            defaults,
            Duration::from_millis(100),
        )
    }

    #[test]
    fn test_first_evaluation_happens_on_start() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(&dir);
        assert!(app.view().is_ready());
        assert_eq!(app.view().snapshot().unwrap().metrics.shares, 100);
    }

    #[test]
    fn test_quit_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(app.should_quit());

        let mut app = app_in(&dir);
        app.handle_key(KeyCode::Char('q'), KeyModifiers::CONTROL);
        assert!(app.should_quit());
    }

    #[test]
    fn test_help_swallows_next_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.handle_key(KeyCode::F(1), KeyModifiers::NONE);
        assert!(app.help_overlay.visible);
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!app.help_overlay.visible);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_save_defaults_writes_settings() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        // Focus the stop slider and push it to the maximum
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        app.handle_key(KeyCode::End, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('s'), KeyModifiers::CONTROL);

        let saved = Settings::load(&dir.path().join("settings.yaml"));
        assert_eq!(saved.defaults.stop_pct, 10.0);
        assert_eq!(saved.defaults.risk_pct, 1.0);
        // Text defaults are not taken from the fields
        assert_eq!(saved.defaults.price, "");

        // Reset now returns to the saved slider position
        app.handle_key(KeyCode::Home, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert_eq!(app.view().slider_values().0, 10.0);
    }
}
