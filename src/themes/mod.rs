//! Theme system for color management
//!
//! See theme.rs for the Theme struct and the built-in palettes.

pub mod theme;

pub use theme::{Theme, ThemeMode};
