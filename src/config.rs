//! Runtime configuration from environment variables
//!
//! All functions fall back to sensible defaults when env vars are not set.

use std::path::PathBuf;
use std::time::Duration;

/// Default input poll cadence
pub const DEFAULT_TICK_MS: u64 = 100;

/// Temp directory for the log file. Override with `RISKCALC_TMP_DIR`.
pub fn tmp_dir() -> PathBuf {
    std::env::var("RISKCALC_TMP_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

/// Log file used while the TUI owns the terminal. Override with `RISKCALC_LOG_FILE`.
pub fn log_file() -> PathBuf {
    std::env::var("RISKCALC_LOG_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| tmp_dir().join("riskcalc.log"))
}

/// Settings file. Override with `RISKCALC_SETTINGS`, otherwise
/// `<config dir>/riskcalc/settings.yaml`.
pub fn settings_file() -> PathBuf {
    if let Ok(path) = std::env::var("RISKCALC_SETTINGS") {
        return PathBuf::from(path);
    }
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("riskcalc").join("settings.yaml");
    }
    PathBuf::from(".riskcalc-settings.yaml")
}

/// Poll cadence. Override with `RISKCALC_TICK_MS`; zero and garbage are ignored.
pub fn tick() -> Duration {
    parse_tick(std::env::var("RISKCALC_TICK_MS").ok().as_deref())
}

fn parse_tick(raw: Option<&str>) -> Duration {
    let ms = raw
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_TICK_MS);
    Duration::from_millis(ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_override() {
        assert_eq!(parse_tick(Some("250")), Duration::from_millis(250));
        assert_eq!(parse_tick(Some(" 40 ")), Duration::from_millis(40));
    }

    #[test]
    fn test_tick_ignores_zero_and_garbage() {
        let default = Duration::from_millis(DEFAULT_TICK_MS);
        assert_eq!(parse_tick(None), default);
        assert_eq!(parse_tick(Some("0")), default);
        assert_eq!(parse_tick(Some("fast")), default);
        assert_eq!(parse_tick(Some("-5")), default);
        assert_eq!(parse_tick(Some("")), default);
    }
}
