//! Persistent preferences: input defaults and display options
//!
//! Only defaults are stored. Calculations themselves are never written out.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::calc::{RISK_PCT, STOP_PCT, TARGET_RATIO};
use crate::themes::ThemeMode;

/// Settings schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub defaults: InputDefaults,
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Values the inputs start from (and return to on reset)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDefaults {
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub capital: String,
    #[serde(default = "default_stop_pct")]
    pub stop_pct: f64,
    #[serde(default = "default_risk_pct")]
    pub risk_pct: f64,
    #[serde(default = "default_target_ratio")]
    pub target_ratio: f64,
}

fn default_stop_pct() -> f64 {
    STOP_PCT.default_value()
}
fn default_risk_pct() -> f64 {
    RISK_PCT.default_value()
}
fn default_target_ratio() -> f64 {
    TARGET_RATIO.default_value()
}

impl Default for InputDefaults {
    fn default() -> Self {
        Self {
            price: String::new(),
            capital: String::new(),
            stop_pct: default_stop_pct(),
            risk_pct: default_risk_pct(),
            target_ratio: default_target_ratio(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "default_show_clock")]
    pub show_clock: bool,
}

fn default_show_clock() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::default(),
            show_clock: default_show_clock(),
        }
    }
}

impl Settings {
    /// Load settings, falling back to defaults if the file is missing or malformed
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::read(path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Ignoring settings file {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let settings = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(settings)
    }

    /// Save settings, creating the parent directory if needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(path, content).with_context(|| format!("writing {}", path.display()))?;
        info!("Saved settings to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("nope.yaml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.defaults.stop_pct, 1.0);
        assert_eq!(settings.defaults.target_ratio, 2.0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "defaults:\n  risk_pct: 2.5\ndisplay:\n  theme: classic\n").unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.defaults.risk_pct, 2.5);
        assert_eq!(settings.defaults.stop_pct, 1.0);
        assert_eq!(settings.display.theme, ThemeMode::Classic);
        assert!(settings.display.show_clock);
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.yaml");
        fs::write(&path, "defaults: [not, a, map").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.yaml");

        let mut settings = Settings::default();
        settings.defaults.price = "125".to_string();
        settings.defaults.stop_pct = 3.5;
        settings.display.show_clock = false;
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path), settings);
    }
}
