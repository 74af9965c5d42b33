//! riskcalc - terminal position sizing and risk/reward calculator
//!
//! Entry point: parses flags, sets up logging and the terminal, runs the app.

use anyhow::Result;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::fs::OpenOptions;
use std::io;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use riskcalc::app::App;
use riskcalc::cli::{Cli, OutputFormat};
use riskcalc::config;
use riskcalc::report::Report;
use riskcalc::settings::Settings;

/// Exit status when price or capital do not parse in `--once` mode
const EXIT_NOT_READY: u8 = 2;

/// Filter used when `RUST_LOG` is unset. `--once` stays quiet on stderr
/// unless something goes wrong.
fn default_filter(headless: bool) -> &'static str {
    if headless {
        "warn"
    } else {
        "info"
    }
}

fn init_tracing(headless: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(headless)));

    if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
        return;
    }

    // The TUI owns stdout, so log to a file
    let path = config::log_file();
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init(),
        Err(_) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::sink)
            .init(),
    }
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

fn run_once(cli: &Cli, settings: &Settings) -> Result<ExitCode> {
    let inputs = cli.apply_to(&settings.defaults);
    let Some(report) = Report::evaluate(&inputs) else {
        eprintln!("inputs not ready: price and capital must be numbers");
        return Ok(ExitCode::from(EXIT_NOT_READY));
    };

    match cli.format {
        OutputFormat::Text => println!("{}", report.to_text()),
        OutputFormat::Yaml => print!("{}", report.to_yaml()?),
    }
    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.once);

    let settings_path = config::settings_file();
    let settings = Settings::load(&settings_path);

    if cli.once {
        return run_once(&cli, &settings);
    }

    let defaults = cli.apply_to(&settings.defaults);
    let tick = cli.tick().unwrap_or_else(config::tick);

    // Leave the terminal usable if anything panics
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        default_hook(panic_info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;

    let mut app = App::new(settings, settings_path, defaults, tick);
    let result = app.run().await;

    finish(result, restore_terminal())
}

/// Combine the run outcome with the terminal restore. A failed restore is
/// logged; the run's own error always wins.
fn finish(result: Result<()>, restored: Result<()>) -> Result<ExitCode> {
    match restored {
        Ok(()) => info!("Terminal restored"),
        Err(e) => warn!("Failed to restore terminal: {:#}", e),
    }
    result.map(|_| ExitCode::SUCCESS)
}
